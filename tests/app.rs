mod common;

use common::{wait_idle, ScriptedTransport};
use eframe::egui;
use nullpaste::app::{Notice, NullPaste, Tab};
use nullpaste::upload::Uploader;

#[test]
fn finished_upload_raises_one_notice() {
    let transport = ScriptedTransport::always(201, "https://example.test/abc");
    let uploader = Uploader::new(transport.clone());
    let mut app = NullPaste::with_uploader(uploader.clone());
    let ctx = egui::Context::default();

    app.state_mut().upload_text = "hello".to_string();
    app.start_upload();
    wait_idle(&uploader);

    app.update_state(&ctx);
    assert_eq!(
        app.state().notice,
        Some(Notice::Succeeded("https://example.test/abc".to_string()))
    );

    app.dismiss_notice();
    app.update_state(&ctx);
    assert_eq!(app.state().notice, None);
    assert_eq!(transport.calls(), 1);
}

#[test]
fn upload_takes_expiry_field_into_account() {
    let transport = ScriptedTransport::always(404, "not found");
    let uploader = Uploader::new(transport.clone());
    let mut app = NullPaste::with_uploader(uploader.clone());
    let ctx = egui::Context::default();

    app.state_mut().expires_text = "6".to_string();
    app.start_upload();
    wait_idle(&uploader);
    app.update_state(&ctx);

    let (_, request) = &transport.seen()[0];
    assert!(request.part("expires").is_some());
    assert_eq!(
        app.state().notice,
        Some(Notice::Failed("not found".to_string()))
    );
    assert_eq!(uploader.history_len(), 0);
}

#[test]
fn starts_on_upload_tab_with_default_settings() {
    let app = NullPaste::with_uploader(Uploader::new(ScriptedTransport::always(200, "")));

    assert_eq!(app.state().tab, Tab::Upload);
    assert_eq!(app.state().settings.instance, "https://0x0.st");
    assert!(app.state().settings.secret);
    assert_eq!(app.state().expires_text, "no");
}
