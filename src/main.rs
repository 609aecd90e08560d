use email_capture::app::{
    load_configuration,
    setup_tracing,
    CaptureApp,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    setup_tracing("email-capture".into(), "info".into());
    let configuration = load_configuration().expect("error loading configuration");
    CaptureApp::from(configuration)?.server?.await
}
