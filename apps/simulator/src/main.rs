use anyhow::Result;
use carousel::{Carousel, CarouselSnapshot, SettleTicket, TrackSurface, TRANSITION_DURATION};
use clap::Parser;
use serde::Serialize;
use shared::domain::{Direction, TransitionMode};
use shared::error::ShowcaseError;

/// Replays a scripted event sequence against the carousel controller on a
/// virtual clock and prints one JSON record per applied event.
#[derive(Parser, Debug)]
struct Args {
    /// Number of showcase items on the track.
    #[arg(long, default_value_t = 9)]
    items: usize,
    /// Viewport width used for the initial items-per-view.
    #[arg(long, default_value_t = 900.0)]
    viewport_width: f32,
    /// Representative item width reported by the headless surface.
    #[arg(long, default_value_t = 180.0)]
    item_width: f32,
    /// Script tokens: `f` forward, `b` back, `s` settle pending moves,
    /// `r<width>` resize (e.g. r1200). Separated by spaces or commas.
    #[arg(long, default_value = "f s f s b s")]
    script: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScriptEvent {
    Forward,
    Back,
    Settle,
    Resize(f32),
}

fn parse_script(script: &str) -> Result<Vec<ScriptEvent>, ShowcaseError> {
    script
        .split([' ', ','])
        .filter(|token| !token.is_empty())
        .map(|token| match token {
            "f" => Ok(ScriptEvent::Forward),
            "b" => Ok(ScriptEvent::Back),
            "s" => Ok(ScriptEvent::Settle),
            _ => {
                if let Some(raw) = token.strip_prefix('r') {
                    raw.parse::<f32>().map(ScriptEvent::Resize).map_err(|_| {
                        ShowcaseError::InvalidScriptWidth {
                            raw: raw.to_string(),
                        }
                    })
                } else {
                    Err(ShowcaseError::UnknownScriptToken {
                        token: token.to_string(),
                    })
                }
            }
        })
        .collect()
}

#[derive(Debug, Default)]
struct HeadlessSurface {
    item_width: Option<f32>,
    offset: Option<f32>,
    last_mode: Option<TransitionMode>,
}

impl TrackSurface for HeadlessSurface {
    fn item_width(&self) -> Option<f32> {
        self.item_width
    }

    fn set_track_offset(&mut self, offset_px: f32, mode: TransitionMode) {
        self.offset = Some(offset_px);
        self.last_mode = Some(mode);
    }
}

#[derive(Debug, Serialize, PartialEq)]
struct SimulationRecord {
    clock_ms: u64,
    event: String,
    snapshot: Option<CarouselSnapshot>,
    offset: Option<f32>,
    mode: Option<TransitionMode>,
}

fn record(
    clock_ms: u64,
    event: impl Into<String>,
    carousel: &Carousel<String>,
    surface: &HeadlessSurface,
) -> SimulationRecord {
    SimulationRecord {
        clock_ms,
        event: event.into(),
        snapshot: carousel.snapshot(),
        offset: surface.offset,
        mode: surface.last_mode,
    }
}

fn run(args: &Args) -> Result<Vec<SimulationRecord>> {
    let events = parse_script(&args.script)?;
    let items: Vec<String> = (0..args.items).map(|n| format!("item-{n}")).collect();
    let mut carousel = Carousel::initialize(items, args.viewport_width);
    let mut surface = HeadlessSurface {
        item_width: Some(args.item_width),
        ..Default::default()
    };
    let mut pending: Vec<SettleTicket> = Vec::new();
    let mut clock_ms: u64 = 0;
    let mut records = Vec::new();

    carousel.render_offset(&mut surface);
    records.push(record(clock_ms, "initialize", &carousel, &surface));

    for event in events {
        let label = match event {
            ScriptEvent::Forward => {
                if let Some(ticket) = carousel.move_by(Direction::Forward, &mut surface) {
                    pending.push(ticket);
                }
                "move_forward".to_string()
            }
            ScriptEvent::Back => {
                if let Some(ticket) = carousel.move_by(Direction::Back, &mut surface) {
                    pending.push(ticket);
                }
                "move_back".to_string()
            }
            ScriptEvent::Settle => {
                clock_ms += TRANSITION_DURATION.as_millis() as u64;
                // Deadlines fire in scheduling order; the controller drops
                // the ones a later move has superseded.
                for ticket in pending.drain(..) {
                    carousel.settle(ticket, &mut surface);
                }
                "settle".to_string()
            }
            ScriptEvent::Resize(width) => {
                carousel.viewport_resized(width, &mut surface);
                format!("resize_{width}")
            }
        };
        records.push(record(clock_ms, label, &carousel, &surface));
    }

    Ok(records)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();
    for record in run(&args)? {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}
