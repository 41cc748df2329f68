//! Mock gateway for isolating services in tests.

use mockall::mock;

use crate::domain::notification::EmailMessage;
use crate::domain::template_data::TemplateData;
use crate::domain::types::{ClientId, SellerId};
use crate::notifier::{DispatchResult, NotificationGateway};

mock! {
    pub Gateway {}

    impl NotificationGateway for Gateway {
        fn send_to_employees(
            &self,
            messages: &[EmailMessage],
            seller_id: SellerId,
            event: &str,
        ) -> DispatchResult;

        fn send_email_to_client(
            &self,
            messages: &[EmailMessage],
            seller_id: SellerId,
            client_id: ClientId,
            event: &str,
            new_status: i64,
        ) -> DispatchResult;

        fn send_sms_to_client(
            &self,
            seller_id: SellerId,
            client_id: ClientId,
            event: &str,
            new_status: i64,
            template_data: &TemplateData,
        ) -> DispatchResult;
    }
}
