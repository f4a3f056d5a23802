
#[macro_use]
extern crate tracing;

use blockworld::{
    logging::init_logging,
    game::{
        Game,
        Mode,
        input::{GameInput, Inputs},
    },
    level::Level,
};
use std::env::args;


const CLI_INTRO: &'static str = "blockworld headless driver";

const CLI_HELP: &'static str = r#"
Examples:

    [this command] --level=level.json
    Load a level and step it in play mode until game over (or the frame cap).

    [this command] --level=level.json --frames=600 --export=out.json
    Step an explicit number of frames, then export the resulting body set.

Env var examples:
    RUST_LOG=blockworld=trace
    Changes logging levels"#;

/// Fixed frame duration, in milliseconds.
const FRAME_DT: f32 = 16.0;


fn main() {
    println!("{}", CLI_INTRO);
    init_logging();

    let args = args().collect::<Vec<_>>();
    if args.get(1).map(String::as_str) == Some("--help") {
        println!("{}", CLI_HELP);
        return;
    }

    let level_path = args.iter()
        .filter_map(|arg| arg.strip_prefix("--level="))
        .next();
    let frames = args.iter()
        .filter_map(|arg| arg.strip_prefix("--frames="))
        .next()
        .map(|s| s.parse::<u32>().expect("invalid --frames value"))
        .unwrap_or(3600);
    let export_path = args.iter()
        .filter_map(|arg| arg.strip_prefix("--export="))
        .next();

    let mut game = Game::new();
    if let Some(path) = level_path {
        let level = Level::read(path).expect("error reading level file");
        game.import_level(&level);
    }

    // the game starts in edit mode; enter play mode through the real input surface
    let mut toggle = Inputs::new();
    toggle.press(GameInput::EditModeToggle);
    game.update(FRAME_DT, &toggle);

    let idle = Inputs::new();
    let mut stepped = 0;
    for _ in 0..frames {
        game.update(FRAME_DT, &idle);
        stepped += 1;
        if game.mode() == Mode::GameOver {
            break;
        }
    }

    let pos = game.player.pos;
    info!(
        frames = stepped,
        mode = ?game.mode(),
        x = pos.x,
        y = pos.y,
        z = pos.z,
        "simulation finished",
    );

    if let Some(path) = export_path {
        game.export_level().write(path).expect("error writing level file");
        info!(path, "exported level");
    }
}
