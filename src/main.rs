use corona::gui::app::AppModel;
use corona::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let (tx, rx) = async_channel::bounded(256);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.troia.corona");

    app.run::<AppModel>(rx);
}
