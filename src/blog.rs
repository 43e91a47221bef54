use crate::store::ContentStore;
use crate::types::{BlogConfig, Content, ContentKind, Pagination};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice {
    pub items: Vec<String>,
    pub page: usize,
    pub total_pages: usize,
}

/// Marks every content under `blog/` as a blog post and assigns its
/// template, output path, and URL.
pub fn assign_blog_metadata(store: &mut ContentStore) {
    let posts: Vec<_> = store
        .filter(|content| content.path.starts_with("blog/"))
        .iter()
        .collect();

    for content_ref in posts {
        let content = store.get_mut(content_ref);
        let output = format!("blog/{}.html", content.slug);

        content.kind = ContentKind::Blog;
        content.template = Some("blog_post.html".to_string());
        content.url = Some(format!("/{}", output));
        content.output = Some(output);
    }
}

/// Splits identifiers into one-based pages of `per_page` items. Empty input
/// yields no pages.
pub fn paginate(items: &[String], per_page: usize) -> Vec<PageSlice> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);

    items
        .chunks(per_page)
        .enumerate()
        .map(|(index, chunk)| PageSlice {
            items: chunk.to_vec(),
            page: index + 1,
            total_pages,
        })
        .collect()
}

/// Creates one synthetic listing content per page per configured locale,
/// carrying the projected identifier slice and pagination metadata.
pub fn build_listing_pages(store: &mut ContentStore, config: &BlogConfig) {
    let mut posts = store.filter(|content| content.kind == ContentKind::Blog);
    posts.order_by_date_desc(store);
    let identifiers = store.values(&posts, config.id_field);

    let slices = paginate(&identifiers, config.posts_per_page);
    log::debug!(
        "building {} listing pages per locale from {} posts",
        slices.len(),
        identifiers.len()
    );

    for lang in &config.languages {
        for slice in &slices {
            let output = format!("blog/{}.html", slice.page);
            store.add(Content {
                id: format!("_blog/{}", slice.page),
                path: format!("_blog/{}/{}", lang, slice.page),
                slug: format!("blog-{}", slice.page),
                lang: lang.clone(),
                kind: ContentKind::Listing,
                template: Some("blog.html".to_string()),
                url: Some(format!("/{}", output)),
                output: Some(output),
                pagination: Some(Pagination {
                    page: slice.page,
                    total_pages: slice.total_pages,
                }),
                page_items: slice.items.clone(),
                ..Content::default()
            });
        }
    }
}
