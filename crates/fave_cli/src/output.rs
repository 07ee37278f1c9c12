//! Printing surface and listener output

use fave_theme::IconId;
use fave_widgets::{IconTransform, RenderSurface};
use serde::Serialize;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Something worth printing
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Record {
    Geometry { size_px: u32, padding_px: u32 },
    Icon { icon: String },
    Transform { rotation_deg: f32, scale_x: f32, scale_y: f32 },
    Changed { favorite: bool },
    Ended { favorite: bool },
    Counter { count: i64 },
}

impl From<IconTransform> for Record {
    fn from(t: IconTransform) -> Self {
        Record::Transform {
            rotation_deg: t.rotation_deg,
            scale_x: t.scale_x,
            scale_y: t.scale_y,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Geometry {
                size_px,
                padding_px,
            } => write!(f, "geometry  {size_px}px padding {padding_px}px"),
            Record::Icon { icon } => write!(f, "icon      {icon}"),
            Record::Transform {
                rotation_deg,
                scale_x,
                scale_y,
            } => write!(
                f,
                "frame     rot {rotation_deg:>8.2} scale {scale_x:.3} x {scale_y:.3}"
            ),
            Record::Changed { favorite } => write!(f, "changed   favorite={favorite}"),
            Record::Ended { favorite } => write!(f, "ended     favorite={favorite}"),
            Record::Counter { count } => write!(f, "counter   {count}"),
        }
    }
}

#[derive(Serialize)]
struct Line<'a> {
    t_ms: f64,
    widget: &'a str,
    #[serde(flatten)]
    record: &'a Record,
}

/// Writes records to stdout, stamped with the demo clock
#[derive(Clone)]
pub struct Printer {
    clock: Rc<Cell<f64>>,
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self {
            clock: Rc::new(Cell::new(0.0)),
            json,
        }
    }

    /// Demo time in milliseconds
    pub fn now(&self) -> f64 {
        self.clock.get()
    }

    pub fn advance(&self, dt_ms: f32) {
        self.clock.set(self.clock.get() + f64::from(dt_ms));
    }

    pub fn format(&self, widget: &str, record: &Record) -> String {
        if self.json {
            let line = Line {
                t_ms: self.now(),
                widget,
                record,
            };
            match serde_json::to_string(&line) {
                Ok(json) => json,
                Err(err) => {
                    tracing::warn!(%err, "failed to encode record");
                    String::new()
                }
            }
        } else {
            format!("[{:>8.1}ms] {:<8} {}", self.now(), widget, record)
        }
    }

    pub fn emit(&self, widget: &str, record: Record) {
        println!("{}", self.format(widget, &record));
    }
}

/// Surface that prints everything it is asked to show
pub struct PrintSurface {
    name: &'static str,
    printer: Printer,
}

impl PrintSurface {
    pub fn new(name: &'static str, printer: Printer) -> Self {
        Self { name, printer }
    }
}

impl RenderSurface for PrintSurface {
    fn set_icon(&mut self, icon: &IconId) {
        self.printer.emit(
            self.name,
            Record::Icon {
                icon: icon.to_string(),
            },
        );
    }

    fn set_transform(&mut self, transform: IconTransform) {
        self.printer.emit(self.name, transform.into());
    }

    fn set_geometry(&mut self, size_px: u32, padding_px: u32) {
        self.printer.emit(
            self.name,
            Record::Geometry {
                size_px,
                padding_px,
            },
        );
    }
}
