//! Parameter extraction from HTML markup.
//!
//! Only start-tag attributes matter, so the markup is run through the
//! html5ever tokenizer and no tree is built. Tree construction would drop
//! nested `<form>` tags and turn `<noscript>` and `<iframe>` bodies into
//! text; the tokenizer reports every start tag it sees. `script` and
//! `style` bodies are still read as raw text. Malformed or truncated
//! markup never fails, it just yields fewer tags.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
    states::RawKind,
};

use super::{ParameterSet, normalize};

/// Element groups and the attributes read from each.
///
/// `form` and `input` appear in more than one group; their attributes are
/// read once per group they belong to, which is harmless under set union.
const ATTRIBUTE_RULES: &[(&[&str], &[&str])] = &[
    (&["input", "textarea", "select", "button", "form"], &["name", "id"]),
    (&["a", "script", "link", "img", "iframe"], &["href", "src"]),
    (&["form"], &["action"]),
    (&["input"], &["value"]),
];

/// Collects normalized attribute values from start tags.
#[derive(Default)]
struct AttributeCollector {
    parameters: RefCell<ParameterSet>,
}

impl AttributeCollector {
    fn collect(&self, tag: &Tag) {
        let mut parameters = self.parameters.borrow_mut();
        let tag_name: &str = &tag.name;

        for (tags, attributes) in ATTRIBUTE_RULES {
            if !tags.iter().any(|t| *t == tag_name) {
                continue;
            }
            for attribute in attributes.iter() {
                let Some(attr) = tag.attrs.iter().find(|a| &*a.name.local == *attribute) else {
                    continue;
                };
                let name = normalize(&attr.value);
                if !name.is_empty() {
                    parameters.insert(name);
                }
            }
        }
    }
}

impl TokenSink for AttributeCollector {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let Token::TagToken(tag) = token else {
            return TokenSinkResult::Continue;
        };
        if tag.kind != TagKind::StartTag {
            return TokenSinkResult::Continue;
        }

        self.collect(&tag);

        if tag.self_closing {
            return TokenSinkResult::Continue;
        }
        match &*tag.name {
            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
            "style" => TokenSinkResult::RawData(RawKind::Rawtext),
            _ => TokenSinkResult::Continue,
        }
    }
}

/// Extract normalized parameter names from an HTML document.
pub fn extract_html_parameters(markup: &str) -> ParameterSet {
    let tokenizer = Tokenizer::new(AttributeCollector::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(markup));

    // The sink never asks for a script pause, so one feed drains the queue.
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    let parameters = tokenizer.sink.parameters.take();
    log::debug!("html: {} parameter(s) extracted", parameters.len());
    parameters
}
