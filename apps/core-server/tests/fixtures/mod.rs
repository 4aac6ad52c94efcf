use core_server::ServerConfig;
use grid_core::config::core_config::AppConfig;
use sql_data_provider::DbConn;
use sql_data_provider::test_utilities::TestItem;

pub fn create_config(additional_config: Option<String>) -> AppConfig<ServerConfig> {
    let base_config = indoc::indoc! {"
        item:
            includeCustom: true
        app:
            databaseUrl: 'sqlite::memory:'
            hideErrorResponseCause: false
            enableMetrics: true
            enableServerInfo: true
            enableOpenApi: true
    "};

    let configs = [Some(base_config.to_string()), additional_config]
        .into_iter()
        .flatten();

    AppConfig::from_yaml(configs).unwrap()
}

pub async fn create_db(config: &AppConfig<ServerConfig>) -> DbConn {
    sql_data_provider::db_conn(config.app.database_url.to_owned())
        .await
        .unwrap()
}

pub fn item(index: usize) -> TestItem {
    TestItem {
        brand: Some(format!("brand {}", index % 4)),
        code: Some(format!("C-{index:03}")),
        core_material: Some(if index % 2 == 0 { "MDF" } else { "oak" }.to_string()),
        finish: Some("matt".to_string()),
        name: Some(format!("item {index}")),
        company_id: 113,
        custom: false,
    }
}
