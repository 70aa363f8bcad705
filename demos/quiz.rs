//! Orthovox quiz demo: builds a small structure, prints its three views with
//! their numbers, shares it as puzzle text and replays the quiz from it.
//!
//! Usage:
//! ```text
//! cargo run --example quiz                 # build, share, guess
//! cargo run --example quiz -- <text>       # guess on shared puzzle text
//! RUST_LOG=orthovox=debug cargo run --example quiz
//! ```

use orthovox::editor::{Editor, Mode};
use orthovox::grid::{CountGrid, GridConfig, View};
use orthovox::puzzle::{PuzzleCodec, Quiz, Verdict};
use orthovox::voxel::Color;

fn print_view(name: &str, numbers: &CountGrid) {
    println!("{name}:");
    for row in numbers.iter_rows() {
        let line: Vec<String> = row
            .iter()
            .map(|n| n.map_or_else(|| ".".to_owned(), |n| n.to_string()))
            .collect();
        println!("  {}", line.join(" "));
    }
}

fn main() -> orthovox::Result<()> {
    // Default: WARN for everything, INFO for orthovox.
    // Override with RUST_LOG env var (e.g. RUST_LOG=orthovox=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("orthovox=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = GridConfig::default();
    let codec = PuzzleCodec::new(config);

    let text = if let Some(text) = std::env::args().nth(1) {
        text
    } else {
        let mut editor = Editor::new(config);
        editor.set_color(Some(Color::new("#3b82f6")));
        let structure = [
            (1, 0, 1),
            (2, 0, 1),
            (2, 1, 1),
            (2, 0, 2),
            (3, 0, 2),
            (3, 1, 2),
            (3, 2, 2),
        ];
        for (x, y, z) in structure {
            editor.add_voxel(x, y, z);
        }

        let snapshot = editor.snapshot();
        for view in View::ALL {
            print_view(&format!("{view:?}"), snapshot.annotations.view(view));
        }
        println!(
            "count = {}, volume = {}, surface area = {}",
            snapshot.stats.count, snapshot.stats.volume, snapshot.stats.surface_area
        );

        editor.set_mode(Mode::Blueprint);
        editor.toggle_cell(View::Top, 2, 3);
        editor.set_mode(Mode::Build);
        println!(
            "after clearing top cell (x=3, z=2) in blueprint mode: {} voxels",
            editor.voxels().len()
        );

        codec.encode(editor.voxels())?
    };

    println!("puzzle: {text}");
    let quiz = Quiz::from_encoded(config, &text)?;
    for guess in [quiz.answer().saturating_sub(1), quiz.answer() + 1, quiz.answer()] {
        let verdict = quiz.check(guess);
        println!("guess {guess}: {verdict:?}");
        if verdict == Verdict::Correct {
            break;
        }
    }
    Ok(())
}
