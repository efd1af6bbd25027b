//! Capital-per-round chart.
//!
//! A [`Chart`] is plain data (points, odds, outcome, title). Styling lives in
//! a [`ChartStyle`] handed to [`Chart::render`], which draws through the
//! ratatui `Chart` widget into any buffer: a live terminal frame or the
//! off-screen buffer behind [`Chart::to_text`].

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart as ChartWidget, Dataset, GraphType, Widget};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuinError};
use crate::game::{GameParams, Outcome};
use crate::mechanics::Trajectory;

/// Most colour bands a style may ask for; larger requests are clamped.
pub const MAX_COLOR_STEPS: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub round: u64,
    pub capital: u32,
}

/// Continuous colour ramp from capital 0 (`low`) to the target (`high`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    pub low: [u8; 3],
    pub high: [u8; 3],
}

impl Default for ColorScale {
    fn default() -> Self {
        // dark navy to sky blue
        Self { low: [19, 43, 67], high: [86, 177, 247] }
    }
}

impl ColorScale {
    /// Linear blend at `t` in [0,1].
    pub fn at(&self, t: f64) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::Rgb(
            mix(self.low[0], self.high[0]),
            mix(self.low[1], self.high[1]),
            mix(self.low[2], self.high[2]),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub scale: ColorScale,
    /// Colour bands the scale is cut into, 1..=MAX_COLOR_STEPS; each band is
    /// one point series.
    pub color_steps: usize,
    pub line: [u8; 3],
    pub draw_line: bool,
    pub draw_points: bool,
    pub legend: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            scale: ColorScale::default(),
            color_steps: 8,
            line: [128, 128, 128],
            draw_line: true,
            draw_points: true,
            legend: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chart {
    pub params: GameParams,
    pub win_probability: f64,
    pub outcome: Outcome,
    pub rounds: u64,
    pub points: Vec<ChartPoint>,
    pub title: String,
}

impl Chart {
    pub fn new(params: GameParams, win_probability: f64, trajectory: &Trajectory) -> Self {
        let outcome = trajectory.outcome();
        let rounds = trajectory.rounds();
        let points = trajectory
            .rounds_iter()
            .map(|(round, capital)| ChartPoint { round, capital })
            .collect();
        let title = title(&params, win_probability, outcome, rounds);
        Self { params, win_probability, outcome, rounds, points, title }
    }

    /// Points split by colour band; band `i` covers capital fractions
    /// `[i/n, (i+1)/n)` of the target, the last band also takes the target.
    pub fn color_bands(&self, style: &ChartStyle) -> Vec<(Color, Vec<(f64, f64)>)> {
        let n = style.color_steps.clamp(1, MAX_COLOR_STEPS);
        let target = self.params.target_amount.max(1) as f64;
        let mut bands: Vec<(Color, Vec<(f64, f64)>)> = (0..n)
            .map(|i| (style.scale.at((i as f64 + 0.5) / n as f64), Vec::new()))
            .collect();
        for pt in &self.points {
            let frac = pt.capital as f64 / target;
            let idx = ((frac * n as f64).floor() as usize).min(n - 1);
            bands[idx].1.push((pt.round as f64, pt.capital as f64));
        }
        bands
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, style: &ChartStyle) {
        if area.area() == 0 {
            return;
        }
        let line: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|pt| (pt.round as f64, pt.capital as f64))
            .collect();
        let bands = self.color_bands(style);
        let n = bands.len();
        let target = self.params.target_amount;

        let mut datasets = Vec::with_capacity(n + 1);
        if style.draw_line {
            let [r, g, b] = style.line;
            let mut ds = Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Rgb(r, g, b)))
                .data(&line);
            if style.legend {
                ds = ds.name("capital");
            }
            datasets.push(ds);
        }
        if style.draw_points {
            for (i, (color, pts)) in bands.iter().enumerate() {
                if pts.is_empty() {
                    continue;
                }
                let mut ds = Dataset::default()
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(*color))
                    .data(pts);
                if style.legend {
                    let lo = u64::from(target) * i as u64 / n as u64;
                    let hi = u64::from(target) * (i as u64 + 1) / n as u64;
                    ds = ds.name(format!("{lo}..{hi}"));
                }
                datasets.push(ds);
            }
        }

        let x_max = self.rounds.max(2) as f64;
        let y_max = target as f64;
        let axis_style = Style::default().fg(Color::Gray);
        let x_axis = Axis::default()
            .title("round")
            .style(axis_style)
            .bounds([1.0, x_max])
            .labels(vec![
                Span::raw("1"),
                Span::raw(format!("{}", (self.rounds.max(2) + 1) / 2)),
                Span::raw(format!("{}", self.rounds.max(2))),
            ]);
        let y_axis = Axis::default()
            .title("capital")
            .style(axis_style)
            .bounds([0.0, y_max])
            .labels(vec![
                Span::raw("0"),
                Span::raw(format!("{}", target / 2)),
                Span::raw(format!("{target}")),
            ]);

        ChartWidget::new(datasets)
            .block(Block::default().borders(Borders::ALL).title(self.title.clone()))
            .x_axis(x_axis)
            .y_axis(y_axis)
            .render(area, buf);
    }

    /// Render off-screen and return the rows, trailing blanks trimmed.
    pub fn to_text(&self, width: u16, height: u16, style: &ChartStyle) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        self.render(area, &mut buf, style);

        let mut out = String::with_capacity(width as usize * height as usize + height as usize);
        for y in 0..height {
            let mut row = String::with_capacity(width as usize);
            for x in 0..width {
                row.push_str(buf.get(x, y).symbol());
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RuinError::Export(e.to_string()))
    }
}

fn title(params: &GameParams, win: f64, outcome: Outcome, rounds: u64) -> String {
    format!(
        "Win probability {:.4} | stake {} -> target {} at p = {} | {} after {} rounds",
        win,
        params.initial_stake,
        params.target_amount,
        params.win_probability,
        outcome.label(),
        rounds,
    )
}
