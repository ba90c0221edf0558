//! Outreach message templates and the local, optimistically edited list.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::types::{TemplateContent, TemplateId, TemplateName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutreachTemplate {
    pub id: TemplateId,
    pub name: String,
    /// Message body with `{placeholder}` markers.
    pub content: String,
    #[serde(default)]
    pub used_count: u32,
}

/// Validated payload for `POST /api/templates`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewTemplate {
    pub name: TemplateName,
    pub content: TemplateContent,
}

impl NewTemplate {
    #[must_use]
    pub fn new(name: TemplateName, content: TemplateContent) -> Self {
        Self { name, content }
    }

    /// Materializes the draft locally with a generated identifier.
    pub fn into_local(self) -> OutreachTemplate {
        OutreachTemplate {
            id: TemplateId::local(),
            name: self.name.into_inner(),
            content: self.content.into_inner(),
            used_count: 0,
        }
    }
}

/// Local edits that survive a page reload until the backend reflects them.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateOverlay {
    #[serde(default)]
    pub added: Vec<OutreachTemplate>,
    #[serde(default)]
    pub removed: BTreeSet<TemplateId>,
}

impl TemplateOverlay {
    pub fn record_added(&mut self, template: OutreachTemplate) {
        self.removed.remove(&template.id);
        self.added.retain(|t| t.id != template.id);
        self.added.push(template);
    }

    pub fn record_removed(&mut self, id: TemplateId) {
        self.added.retain(|t| t.id != id);
        self.removed.insert(id);
    }

    /// Forgets edits a successfully fetched list already reflects: additions
    /// the backend now lists and removals it no longer lists. Returns whether
    /// anything was dropped.
    pub fn reconcile(&mut self, fetched: &[OutreachTemplate]) -> bool {
        let listed = |id: &TemplateId| fetched.iter().any(|t| &t.id == id);
        let before = (self.added.len(), self.removed.len());

        self.added.retain(|t| !listed(&t.id));
        self.removed.retain(|id| listed(id));

        before != (self.added.len(), self.removed.len())
    }

    /// Drops the oldest addition, or failing that one removal. Returns `false`
    /// once the overlay is empty.
    pub fn drop_oldest(&mut self) -> bool {
        if !self.added.is_empty() {
            self.added.remove(0);
            return true;
        }
        self.removed.pop_first().is_some()
    }
}

/// Template list as the composer sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateBook {
    templates: Vec<OutreachTemplate>,
}

impl TemplateBook {
    pub fn new(templates: Vec<OutreachTemplate>) -> Self {
        Self { templates }
    }

    pub fn into_inner(self) -> Vec<OutreachTemplate> {
        self.templates
    }

    pub fn find(&self, id: &TemplateId) -> Option<&OutreachTemplate> {
        self.templates.iter().find(|t| &t.id == id)
    }

    /// Re-applies session-stored local edits on top of a fresh fetch.
    pub fn apply_overlay(&mut self, overlay: &TemplateOverlay) {
        self.templates.retain(|t| !overlay.removed.contains(&t.id));
        for template in &overlay.added {
            if self.find(&template.id).is_none() {
                self.templates.push(template.clone());
            }
        }
    }
}

/// Fills `{placeholder}` markers from `values`.
///
/// Unknown placeholders and unbalanced braces are left as written.
pub fn render_message(content: &str, values: &HashMap<&str, &str>) -> String {
    let mut rendered = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match values.get(key) {
                    Some(value) => rendered.push_str(value),
                    None => {
                        rendered.push('{');
                        rendered.push_str(key);
                        rendered.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                rendered.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    rendered.push_str(rest);
    rendered
}
