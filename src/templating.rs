use std::collections::HashMap;
use std::sync::Arc;

use tera::{Context, Tera, Value};

use crate::error::Result;
use crate::related::further_readings;
use crate::store::ContentStore;
use crate::summary::strip_html_tags;
use crate::tags::TagIndex;
use crate::types::{BlogConfig, Content, Summary};

/// Renders a summary for final output. `Literal` fragments pass through
/// unchanged; `Templated` fragments are evaluated with the content in
/// scope.
pub fn render_summary(summary: &Summary, content: &Content) -> Result<String> {
    match summary {
        Summary::Empty => Ok(String::new()),
        Summary::Literal(html) => Ok(html.clone()),
        Summary::Templated(source) => {
            let mut context = Context::new();
            context.insert("content", content);
            Ok(Tera::one_off(source, &context, false)?)
        }
    }
}

/// Registers the template helper functions against a finalized store
/// snapshot. Call once all content passes have run.
pub fn register_functions(
    tera: &mut Tera,
    store: Arc<ContentStore>,
    index: Arc<TagIndex>,
    config: Arc<BlogConfig>,
) {
    register_strip_html_tags(tera);

    {
        let store = store.clone();
        let index = index.clone();
        tera.register_function(
            "get_further_readings",
            move |args: &HashMap<String, Value>| {
                let path = string_arg(args, "get_further_readings", "path")?;
                let subject = store
                    .by_path(&path)
                    .map_err(|error| tera::Error::msg(error.to_string()))?;

                let related = further_readings(&store, &index, subject, &config)
                    .map_err(|error| tera::Error::msg(error.to_string()))?;

                let contents: Vec<&Content> =
                    related.iter().map(|content_ref| store.get(content_ref)).collect();

                serde_json::to_value(contents)
                    .map_err(|error| tera::Error::msg(error.to_string()))
            },
        );
    }

    tera.register_function(
        "render_summary",
        move |args: &HashMap<String, Value>| {
            let path = string_arg(args, "render_summary", "path")?;
            let subject = store
                .by_path(&path)
                .map_err(|error| tera::Error::msg(error.to_string()))?;

            let content = store.get(subject);
            let rendered = render_summary(&content.summary, content)
                .map_err(|error| tera::Error::msg(error.to_string()))?;

            Ok(Value::String(rendered))
        },
    );
}

pub fn register_strip_html_tags(tera: &mut Tera) {
    tera.register_function(
        "strip_html_tags",
        |args: &HashMap<String, Value>| {
            let html = string_arg(args, "strip_html_tags", "html")?;
            Ok(Value::String(strip_html_tags(&html)))
        },
    );
}

fn string_arg(
    args: &HashMap<String, Value>,
    function: &str,
    name: &str,
) -> tera::Result<String> {
    args.get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            tera::Error::msg(format!(
                "`{}` requires a string `{}` argument",
                function, name
            ))
        })
}
