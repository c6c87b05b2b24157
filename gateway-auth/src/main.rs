use gateway_auth::app_state::AppState;
use gateway_auth::utils::Config;
use gateway_auth::Application;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Config::from_env().expect("Failed to load config");
    let app_state = AppState::from_config(&config);
    let app = Application::build(app_state, config.listen_address())
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
