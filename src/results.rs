//! Result items and the `{text|action|desc}` stream parser.
//!
//! The query script answers with a stream of brace-delimited entries:
//!
//! ```text
//! {Firefox|firefox|%BWeb browser%}
//! {Documents}
//! {notes.txt|xdg-open ~/notes.txt}
//! ```
//!
//! An entry without an action is a non-selectable title row. `\{`, `\|`,
//! `\}` and `\\` escape the delimiters.

use crate::error::{Error, Result};

/// One entry of the result list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultItem {
    /// Markup shown in the row.
    pub text: String,
    /// Command executed on selection; `None` marks a title row.
    pub action: Option<String>,
    /// Markup shown in the description panel while highlighted.
    pub desc: Option<String>,
}

impl ResultItem {
    /// A non-selectable title row.
    #[must_use]
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
            desc: None,
        }
    }

    /// A selectable row without a description.
    #[must_use]
    pub fn new(text: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: Some(action.into()),
            desc: None,
        }
    }

    /// A selectable row with a description panel.
    #[must_use]
    pub fn with_desc(
        text: impl Into<String>,
        action: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            action: Some(action.into()),
            desc: Some(desc.into()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Closed,
    Text,
    Action,
    Desc,
}

/// Parse a `{text|action|desc}` stream into result items.
///
/// A delimiter in the wrong place is a syntax error; the stream yields no
/// items in that case, matching the all-or-nothing behavior callers rely on
/// when a query script misbehaves.
pub fn parse_results(input: &str) -> Result<Vec<ResultItem>> {
    let mut items: Vec<ResultItem> = Vec::new();
    let mut field = Field::Closed;
    let mut escaped = false;

    for (index, ch) in input.char_indices() {
        if escaped {
            match ch {
                '{' | '|' | '}' | '\\' => {
                    push_char(&mut items, field, ch);
                    escaped = false;
                    continue;
                }
                _ => {
                    // Not an escape after all; the backslash is literal.
                    push_char(&mut items, field, '\\');
                    escaped = false;
                }
            }
        }
        match ch {
            '\\' => escaped = true,
            '{' => {
                if field != Field::Closed {
                    return Err(Error::ResultSyntax { index, found: '{' });
                }
                items.push(ResultItem::default());
                field = Field::Text;
            }
            '|' => match field {
                Field::Closed => {
                    return Err(Error::ResultSyntax { index, found: '|' });
                }
                Field::Text => {
                    current(&mut items).action = Some(String::new());
                    field = Field::Action;
                }
                Field::Action => {
                    current(&mut items).desc = Some(String::new());
                    field = Field::Desc;
                }
                // Extra separators inside a description stay literal.
                Field::Desc => push_char(&mut items, field, '|'),
            },
            '}' => {
                if field == Field::Closed {
                    return Err(Error::ResultSyntax { index, found: '}' });
                }
                field = Field::Closed;
            }
            other => push_char(&mut items, field, other),
        }
    }

    Ok(items)
}

fn current(items: &mut [ResultItem]) -> &mut ResultItem {
    let last = items.len() - 1;
    &mut items[last]
}

fn push_char(items: &mut [ResultItem], field: Field, ch: char) {
    if items.is_empty() {
        return; // stray characters between entries are ignored
    }
    let item = current(items);
    match field {
        Field::Closed => {}
        Field::Text => item.text.push(ch),
        Field::Action => {
            if let Some(action) = item.action.as_mut() {
                action.push(ch);
            }
        }
        Field::Desc => {
            if let Some(desc) = item.desc.as_mut() {
                desc.push(ch);
            }
        }
    }
}
