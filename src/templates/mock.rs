//! Mock renderer for isolating services in tests.

use mockall::mock;

use crate::domain::template_data::TemplateData;
use crate::domain::types::SellerId;
use crate::templates::MessageRenderer;

mock! {
    pub Renderer {}

    impl MessageRenderer for Renderer {
        fn render(
            &self,
            template_key: &str,
            variables: &TemplateData,
            seller_id: SellerId,
        ) -> String;
    }
}
