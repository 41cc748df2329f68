//! Tera-backed implementation of [`MessageRenderer`].

use tera::{Context, Tera};

use crate::domain::template_data::TemplateData;
use crate::domain::types::SellerId;
use crate::templates::MessageRenderer;

/// Renders `{key}.txt` templates, preferring `seller_{id}/{key}.txt` overrides.
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    pub fn new(tera: Tera) -> Self {
        Self { tera }
    }

    /// Parses every template matching `glob`, e.g. `templates/**/*.txt`.
    pub fn from_glob(glob: &str) -> tera::Result<Self> {
        Ok(Self::new(Tera::new(glob)?))
    }

    fn template_name(&self, template_key: &str, seller_id: SellerId) -> Option<String> {
        let scoped = format!("seller_{seller_id}/{template_key}.txt");
        let shared = format!("{template_key}.txt");

        [scoped, shared]
            .into_iter()
            .find(|name| self.tera.get_template_names().any(|known| known == name))
    }
}

impl MessageRenderer for TeraRenderer {
    fn render(&self, template_key: &str, variables: &TemplateData, seller_id: SellerId) -> String {
        let Some(name) = self.template_name(template_key, seller_id) else {
            log::warn!("No template {template_key} for seller {seller_id}");
            return template_key.to_string();
        };

        let context = match Context::from_serialize(variables) {
            Ok(context) => context,
            Err(e) => {
                log::error!("Failed to build context for {name}: {e}");
                return template_key.to_string();
            }
        };

        match self.tera.render(&name, &context) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                log::error!("Failed to render {name}: {e}");
                template_key.to_string()
            }
        }
    }
}
