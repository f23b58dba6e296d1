//! main.rs

use signup::configuration::get_configuration;
use signup::error::SignupResult;
use signup::registration::{create_user, report_line};
use signup::telemetry::{get_subscriber, init_subscriber};

fn main() -> SignupResult<()> {
    let configuration = get_configuration()?;
    let subscriber = get_subscriber(
        configuration.application.name.clone(),
        configuration.application.log_level.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber);

    let demo = configuration.demo;
    tracing::info!(
        styles = demo.styles.len(),
        registrations = demo.registrations.len(),
        "Running registration demo"
    );
    for style in &demo.styles {
        for form in &demo.registrations {
            let outcome = create_user(*style, form.clone());
            println!("{}", report_line(*style, &outcome));
        }
    }
    Ok(())
}
