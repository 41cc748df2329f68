use std::io::Write;

use config::{Config, File, FileFormat};
use pushkind_returns::domain::template_data::TemplateData;
use pushkind_returns::domain::types::{ClientId, SellerId};
use pushkind_returns::models::config::ServerConfig;
use pushkind_returns::repository::errors::RepositoryError;
use pushkind_returns::repository::{ClientReader, InMemoryRepository, SellerSettingsReader};
use pushkind_returns::templates::MessageRenderer;
use pushkind_returns::templates::tera_renderer::TeraRenderer;

fn load(path: &str) -> ServerConfig {
    Config::builder()
        .add_source(File::with_name(path))
        .build()
        .expect("config builds")
        .try_deserialize()
        .expect("config deserializes")
}

#[test]
fn default_config_builds_store() {
    let config = load("config/default");
    let repo = InMemoryRepository::new(&config.directory).expect("valid directory");

    let client = repo
        .get_client_by_id(ClientId::new(1))
        .unwrap()
        .expect("demo client");
    assert!(client.is_customer());
    assert_eq!(
        repo.get_sender_email(SellerId::new(1)).unwrap(),
        "contractor@example.com"
    );
    assert_eq!(
        repo.list_emails_by_permission(SellerId::new(1), "tsGoodsReturn")
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn bundled_templates_render() {
    let renderer = TeraRenderer::from_glob("templates/**/*.txt").expect("templates parse");
    let variables = TemplateData::new()
        .with("FROM", "Pending")
        .with("TO", "Completed");

    assert_eq!(
        renderer.render("PositionStatusHasChanged", &variables, SellerId::new(2)),
        "Position status changed from Pending to Completed"
    );
    assert_ne!(
        renderer.render("NewPositionAdded", &TemplateData::new(), SellerId::new(1)),
        renderer.render("NewPositionAdded", &TemplateData::new(), SellerId::new(2))
    );
}

#[test]
fn invalid_recipient_is_rejected() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("temp file");
    write!(
        file,
        r#"
address: 127.0.0.1
port: 8080
templates_dir: templates/**/*.txt
zmq_notifier_pub: tcp://127.0.0.1:5557
directory:
  sellers:
    - id: 1
      name: Shop
      permissions:
        tsGoodsReturn:
          - not-an-email
"#
    )
    .expect("write config");

    let config: ServerConfig = Config::builder()
        .add_source(File::new(
            file.path().to_str().expect("utf-8 path"),
            FileFormat::Yaml,
        ))
        .build()
        .expect("config builds")
        .try_deserialize()
        .expect("config deserializes");

    let result = InMemoryRepository::new(&config.directory);

    assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
}
