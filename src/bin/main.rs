use embassy_executor::Spawner;
use embassy_futures::{
    join::join3,
    select::{Either, select},
};
use embassy_time::Timer;
use log::{LevelFilter, error, info};
use static_cell::StaticCell;
use typecycle_host::{
    clock::MonotonicClock,
    handle::CyclerHandle,
    render::{FrameRenderer, LineFrame, line::LineRenderer, terminal::TerminalDisplay},
};

use clap::Parser;
use cli::Args;

#[path = "main/cli.rs"]
mod cli;

const EXIT_CONFIG_ERROR: i32 = 2;

type Words = &'static [String];

static WORDS: StaticCell<Vec<String>> = StaticCell::new();
static HANDLE: StaticCell<CyclerHandle<Words>> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let words: Words = WORDS.init(args.word_list()).as_slice();

    let handle = match CyclerHandle::start(args.cycler_config(words), MonotonicClock::start()) {
        Ok(handle) => HANDLE.init(handle),
        Err(err) => {
            error!("config: {}", err);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };
    let handle: &'static CyclerHandle<Words> = handle;
    info!(
        "boot: typecycle words={} once={} run_for_ms={:?}",
        words.len(),
        args.once,
        args.run_for_ms
    );

    let cycler_future = handle.run();

    let lifetime_future = async {
        match args.run_for_ms {
            Some(ms) => Timer::after_millis(ms).await,
            None => core::future::pending::<()>().await,
        }
        info!("lifetime: run_for_ms elapsed, stopping");
        handle.stop();
    };

    let ui_future = async {
        let mut renderer = LineRenderer::new(&args.prefix);
        let mut frame = LineFrame::new();
        let mut display = TerminalDisplay::new(std::io::stdout());
        let mut display_fault_logged = false;
        let mut last_revision = None;
        let mut pass_logged = false;

        loop {
            let revision = handle.revision();
            if last_revision != Some(revision) {
                handle.with_view(|view| renderer.render(view, &mut frame));
                if let Err(err) = display.flush_frame(&frame)
                    && !display_fault_logged
                {
                    error!("display: flush failed: {}", err);
                    display_fault_logged = true;
                }
                last_revision = Some(revision);
            }

            if handle.is_stopped() {
                break;
            }

            if pass_logged {
                handle.wait_changed().await;
            } else if let Either::Second(()) =
                select(handle.wait_changed(), handle.wait_pass_completed()).await
            {
                info!("ui: one-shot pass complete");
                pass_logged = true;
            }
        }

        if let Err(err) = display.finish() {
            error!("display: finish failed: {}", err);
        }
        info!("ui: {} frames flushed", display.frames_flushed());
    };

    let _ = join3(cycler_future, lifetime_future, ui_future).await;
    std::process::exit(0);
}
