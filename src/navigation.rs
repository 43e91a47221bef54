use crate::store::ContentStore;
use crate::types::{BlogConfig, ContentKind};

/// Links each blog post to its neighbors in the date-descending order of
/// its locale: `next_post` points at the newer neighbor, `prev_post` at the
/// older one.
pub fn link_blog_posts(store: &mut ContentStore, config: &BlogConfig) {
    for lang in &config.languages {
        let mut posts = store.filter(|content| {
            content.kind == ContentKind::Blog && content.lang == *lang
        });
        posts.order_by_date_desc(store);

        let refs: Vec<_> = posts.iter().collect();
        let urls: Vec<_> = refs
            .iter()
            .map(|content_ref| store.get(*content_ref).url.clone())
            .collect();

        for (index, content_ref) in refs.iter().enumerate() {
            if index > 0 {
                store.get_mut(*content_ref).next_post = urls[index - 1].clone();
            }
            if index + 1 < refs.len() {
                store.get_mut(*content_ref).prev_post = urls[index + 1].clone();
            }
        }
    }
}
