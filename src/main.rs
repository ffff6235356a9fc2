/*
 * Particle Constellation
 *
 * An animated field of points that drift and bounce inside the window, joined
 * by thin lines whenever two of them come close. The cursor can act as a force
 * point, and every parameter can be tuned live from the control panel.
 */

use constellation::{app, logging};

fn main() {
    let _logger = match logging::setup() {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    nannou::app(app::model).update(app::update).run();
}
