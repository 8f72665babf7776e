use themeswitch::{ControlDisplay, DocumentThemeSink, Theme, ToggleConfig};
use tracing::debug;
use web_sys::{Document, Element};

use crate::markup::{control_pair, marker_write, MarkerWrite};

/// Writes the theme marker on `<html>` and the toggle's icon and label.
///
/// Elements are looked up by id on every write, so a sink built from `<head>`
/// starts updating the control once its markup has been parsed. Without both
/// icon and label the display update is skipped; the marker is still written.
#[derive(Debug, Clone)]
pub struct DomSink {
    document: Option<Document>,
    attribute: String,
    icon_id: String,
    label_id: String,
}

impl DomSink {
    /// Writes to the current document using the ids in `config`.
    pub fn from_config(config: &ToggleConfig) -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::from_document(document, config)
    }

    pub fn from_document(document: Option<Document>, config: &ToggleConfig) -> Self {
        Self {
            document,
            attribute: config.root_attribute.clone(),
            icon_id: config.icon_id.clone(),
            label_id: config.label_id.clone(),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        if id.is_empty() {
            return None;
        }
        self.document.as_ref()?.get_element_by_id(id)
    }

    pub fn has_control(&self) -> bool {
        control_pair(self.element(&self.icon_id), self.element(&self.label_id)).is_some()
    }
}

impl DocumentThemeSink for DomSink {
    fn set_marker(&mut self, marker: Option<Theme>) {
        let Some(root) = self.document.as_ref().and_then(Document::document_element) else {
            debug!("no document element, theme marker not written");
            return;
        };
        let result = match marker_write(&self.attribute, marker) {
            MarkerWrite::Set { attribute, value } => root.set_attribute(attribute, value),
            MarkerWrite::Remove { attribute } => root.remove_attribute(attribute),
        };
        if let Err(e) = result {
            debug!(error = ?e, attribute = %self.attribute, "failed to update theme marker");
        }
    }

    fn show_control(&mut self, display: &ControlDisplay) -> bool {
        let Some((icon, label)) =
            control_pair(self.element(&self.icon_id), self.element(&self.label_id))
        else {
            return false;
        };
        icon.set_text_content(Some(&display.icon));
        label.set_text_content(Some(&display.label));
        true
    }
}
