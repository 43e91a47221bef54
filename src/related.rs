use crate::error::Result;
use crate::store::{ContentRef, ContentSet, ContentStore};
use crate::tags::TagIndex;
use crate::types::BlogConfig;

/// Selects related contents for one subject: explicitly listed paths first
/// (in the author's order), then tag-matched candidates capped per tag and
/// overall, re-sorted by date descending.
pub fn further_readings(
    store: &ContentStore,
    index: &TagIndex,
    subject: ContentRef,
    config: &BlogConfig,
) -> Result<ContentSet> {
    let content = store.get(subject);

    let mut explicit = ContentSet::new();

    for path in &content.further_readings {
        let mut candidate = store.by_path(path)?;

        if store.get(candidate).lang != content.lang {
            candidate = store.translation(candidate, &content.lang)?;
        }

        explicit.insert(candidate);
    }

    if explicit.len() >= config.further_readings_max {
        return Ok(explicit);
    }

    let mut auto = ContentSet::new();

    'tags: for tag in &content.tags {
        let Some(entry) = index.get(tag) else {
            continue;
        };

        let mut from_tag = 0;

        // Index entries are already date-descending.
        for candidate_ref in entry.contents.iter() {
            if candidate_ref == subject {
                continue;
            }

            let candidate = store.get(candidate_ref);

            if candidate.lang != content.lang
                || explicit.contains(candidate_ref)
                || auto.contains(candidate_ref)
            {
                continue;
            }

            auto.insert(candidate_ref);
            from_tag += 1;

            if from_tag == config.further_readings_max_per_tag {
                break;
            }

            if explicit.len() + auto.len() >= config.further_readings_max {
                break 'tags;
            }
        }

        if explicit.len() + auto.len() >= config.further_readings_max {
            break;
        }
    }

    auto.order_by_date_desc(store);

    Ok(explicit.concat(auto))
}
