use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{info, warn};

use portfolio_actix::contact::adapter::outgoing::LogContactNotifier;
use portfolio_actix::contact::application::ports::outgoing::ContactNotifier;
use portfolio_actix::email::adapter::outgoing::SmtpEmailSender;
use portfolio_actix::email::application::services::ContactEmailNotifier;
use portfolio_actix::shared::config::{AppConfig, ContactMailConfig};
use portfolio_actix::shared::telemetry::init_tracing;
use portfolio_actix::{init_body_limits, init_routes, AppState};

fn build_notifier(config: &AppConfig) -> std::io::Result<Arc<dyn ContactNotifier + Send + Sync>> {
    let notifier: Arc<dyn ContactNotifier + Send + Sync> = match &config.contact_mail {
        Some(ContactMailConfig::Relay {
            server,
            username,
            password,
            from,
            to,
        }) => {
            let sender = SmtpEmailSender::new(server, username, password, from)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            info!(relay = %server, "Contact submissions forwarded by email");
            Arc::new(ContactEmailNotifier::new(Arc::new(sender), to))
        }
        Some(ContactMailConfig::Local {
            host,
            port,
            from,
            to,
        }) => {
            info!(host = %host, port = *port, "Contact submissions forwarded to local SMTP");
            let sender = SmtpEmailSender::new_local(host, *port, from);
            Arc::new(ContactEmailNotifier::new(Arc::new(sender), to))
        }
        None => {
            warn!("CONTACT_NOTIFY_TO not set; contact submissions are only logged");
            Arc::new(LogContactNotifier)
        }
    };

    Ok(notifier)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    init_tracing("info,actix_web=info");
    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;

    let notifier = build_notifier(&config)?;
    let state = AppState::from_config(&config, notifier);
    let body_limit = config.json_body_limit_bytes;

    let server_url = config.server_url();
    info!(
        content = %config.content_path.display(),
        assets = %config.assets_dir.display(),
        "Server run on: {}",
        server_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| init_body_limits(cfg, body_limit))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
