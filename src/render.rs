//! Server-side rendering of the greeting page.
//!
//! The markup produced here is what the client bundle rebuilds from the
//! serialized props, so both must stay in sync with `bundle::CLIENT_RUNTIME`.

use crate::bundle::bundle_file_name;
use crate::i18n::{Language, Messages};
use anyhow::{Context, Result};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

/// Props of the greeting component, shipped to the client for rehydration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub unread: u64,
}

/// Markup of the greeting component.
pub fn render_component(messages: &Messages, props: &RenderProps) -> String {
    format!(
        "<div><h1>{}</h1><p>{}</p><p>{}</p></div>",
        encode_text(messages.title),
        encode_text(&messages.greeting(props.name.as_deref())),
        encode_text(&messages.unread_notification(props.unread)),
    )
}

/// Full HTML document: component markup, serialized props and the script
/// bundle for `language`.
pub fn render_document(
    language: Language,
    messages: &Messages,
    props: &RenderProps,
) -> Result<String> {
    let props_json = serde_json::to_string(props).context("Failed to serialize render props")?;

    Ok(format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"{lang}\">",
            "<head><meta charset=\"utf-8\"/><title>{title}</title></head>",
            "<body>",
            "<div id=\"app\" data-props=\"{props}\">{app}</div>",
            "<script type=\"text/javascript\" charset=\"utf-8\" src=\"{bundle}\"></script>",
            "</body>",
            "</html>"
        ),
        lang = encode_double_quoted_attribute(language.code()),
        title = encode_text(messages.title),
        props = encode_double_quoted_attribute(&props_json),
        app = render_component(messages, props),
        bundle = encode_double_quoted_attribute(&bundle_file_name(language.code())),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LanguageRegistry, ENGLISH_MESSAGES, JAPANESE_MESSAGES};

    fn props(name: Option<&str>, unread: u64) -> RenderProps {
        RenderProps {
            name: name.map(String::from),
            unread,
        }
    }

    #[test]
    fn test_render_component_english() {
        let html = render_component(&ENGLISH_MESSAGES, &props(Some("Ana"), 1));
        assert_eq!(
            html,
            "<div><h1>Simple i18n implementation with TypeScript</h1>\
             <p>Hello, Ana.</p><p>You have 1 unread message.</p></div>"
        );
    }

    #[test]
    fn test_render_component_default_name() {
        let html = render_component(&JAPANESE_MESSAGES, &RenderProps::default());
        assert!(html.contains("こんにちは、 名無しの権兵衛 さん"));
        assert!(html.contains("未読メッセージはありません"));
    }

    #[test]
    fn test_render_component_escapes_name() {
        let html = render_component(&ENGLISH_MESSAGES, &props(Some("<b>Ana</b> & co"), 0));
        assert!(html.contains("Hello, &lt;b&gt;Ana&lt;/b&gt; &amp; co."));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_render_document_japanese() {
        let registry = LanguageRegistry::builtin().unwrap();
        let language = registry.language("ja").unwrap();
        let html =
            render_document(language, registry.messages(language), &props(Some("Ana"), 2)).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"ja\">"));
        assert!(html.contains("<title>TypeScript によるシンプルな i18n 実装</title>"));
        assert!(html.contains("未読メッセージが 2 通あります"));
        assert!(html.contains("src=\"bundle_ja.js\""));
    }

    #[test]
    fn test_render_document_embeds_escaped_props() {
        let registry = LanguageRegistry::builtin().unwrap();
        let language = registry.default_language();
        let html =
            render_document(language, registry.messages(language), &props(Some("Ana"), 2)).unwrap();

        assert!(html.contains("data-props=\"{&quot;name&quot;:&quot;Ana&quot;,&quot;unread&quot;:2}\""));
    }

    #[test]
    fn test_props_without_name_omit_field() {
        let json = serde_json::to_string(&props(None, 3)).unwrap();
        assert_eq!(json, r#"{"unread":3}"#);
    }
}
