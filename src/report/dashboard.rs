use crate::config::DashboardConfig;
use crate::data::column_values;
use crate::engines::ratios::{EfficiencyRatios, ProfitabilityRatios};
use crate::engines::DuPontEngine;
use crate::error::{AnalysisError, Result};
use crate::pipeline::Analysis;
use crate::types::Metric;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const PALETTE: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
];

// first font registered with plotters in this process
static FONT: OnceLock<PathBuf> = OnceLock::new();

/// One named line of a chart; `NaN` values leave a gap
#[derive(Debug, Clone)]
pub struct ChartLine {
    pub name: String,
    pub values: Vec<f64>,
}

impl ChartLine {
    pub fn new(name: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }

    /// Runs of consecutive finite points as (period index, value)
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();

        for (i, &v) in self.values.iter().enumerate() {
            if v.is_finite() {
                current.push((i as f64, v));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }
}

#[derive(Debug, Clone)]
pub struct ChartPanel {
    pub title: String,
    pub y_label: String,
    pub lines: Vec<ChartLine>,
}

impl ChartPanel {
    fn new(title: &str, y_label: &str, lines: Vec<ChartLine>) -> Self {
        Self {
            title: title.to_string(),
            y_label: y_label.to_string(),
            lines,
        }
    }

    /// Padded value range over the finite points of all lines
    pub fn y_range(&self) -> (f64, f64) {
        let finite = self
            .lines
            .iter()
            .flat_map(|l| l.values.iter().copied())
            .filter(|v| v.is_finite());

        let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

        if min > max {
            (0.0, 1.0)
        } else if min == max {
            let pad = (min.abs() * 0.1).max(1.0);
            (min - pad, max + pad)
        } else {
            let pad = (max - min) * 0.05;
            (min - pad, max + pad)
        }
    }
}

/// Everything drawn on the dashboard, in grid order
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub periods: Vec<String>,
    pub panels: Vec<ChartPanel>,
}

impl DashboardData {
    pub fn from_analysis(analysis: &Analysis) -> Result<Self> {
        let statements = &analysis.statements;
        let profitability = &analysis.ratios.profitability;
        let efficiency = &analysis.ratios.efficiency;
        let three_step = &analysis.dupont.three_step;
        let five_step = &analysis.dupont.five_step;

        let line = |table: &polars::prelude::DataFrame, column: &str, name: &str| -> Result<ChartLine> {
            Ok(ChartLine::new(name, column_values(table, column)?))
        };

        let panels = vec![
            ChartPanel::new(
                "Revenue vs Net Income Trend",
                "USD (thousands)",
                vec![
                    ChartLine::new(Metric::Revenue.as_str(), statements.values(Metric::Revenue)?),
                    ChartLine::new(Metric::NetIncome.as_str(), statements.values(Metric::NetIncome)?),
                ],
            ),
            ChartPanel::new(
                "Profitability Margins",
                "Ratio",
                vec![
                    line(profitability, ProfitabilityRatios::GROSS_MARGIN, "Gross Margin")?,
                    line(profitability, ProfitabilityRatios::EBITDA_MARGIN, "EBITDA Margin")?,
                    line(profitability, ProfitabilityRatios::NET_PROFIT_MARGIN, "Net Profit Margin")?,
                ],
            ),
            ChartPanel::new(
                "Return Ratios",
                "Ratio",
                vec![
                    line(profitability, ProfitabilityRatios::RETURN_ON_EQUITY, "ROE")?,
                    line(profitability, ProfitabilityRatios::RETURN_ON_ASSETS, "ROA")?,
                ],
            ),
            ChartPanel::new(
                "Efficiency Ratios",
                "Ratio",
                vec![
                    line(efficiency, EfficiencyRatios::ASSET_TURNOVER, "Asset Turnover")?,
                    line(efficiency, EfficiencyRatios::INVENTORY_TURNOVER, "Inventory Turnover")?,
                ],
            ),
            ChartPanel::new(
                "3-Step DuPont Components",
                "Ratio",
                vec![
                    line(three_step, DuPontEngine::NET_PROFIT_MARGIN, "Net Profit Margin")?,
                    line(three_step, DuPontEngine::ASSET_TURNOVER, "Asset Turnover")?,
                    line(three_step, DuPontEngine::EQUITY_MULTIPLIER, "Equity Multiplier")?,
                ],
            ),
            ChartPanel::new(
                "ROE Analysis",
                "ROE",
                vec![
                    line(three_step, DuPontEngine::ROE_DIRECT, "ROE (Direct)")?,
                    line(five_step, DuPontEngine::ROE_FIVE_STEP, "ROE (5-Step DuPont)")?,
                ],
            ),
        ];

        Ok(Self {
            periods: statements.periods().to_vec(),
            panels,
        })
    }
}

pub struct DashboardRenderer {
    config: DashboardConfig,
}

impl DashboardRenderer {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Draw the 2 x 3 chart grid and save it as one image.
    pub fn render(&self, data: &DashboardData) -> Result<PathBuf> {
        Self::ensure_font(&self.config.font_paths)?;

        self.draw(data)
            .map_err(|e| AnalysisError::Rendering(format!("Could not save plot: {}", e)))?;

        log::info!("Dashboard saved as '{}'", self.config.output.display());
        Ok(self.config.output.clone())
    }

    fn ensure_font(paths: &[PathBuf]) -> Result<()> {
        if let Some(path) = FONT.get() {
            log::debug!("Dashboard text uses {}", path.display());
            return Ok(());
        }

        let path = Self::register_first_font(paths).map_err(AnalysisError::Rendering)?;
        log::debug!("Dashboard text uses {}", path.display());
        let _ = FONT.set(path);
        Ok(())
    }

    fn register_first_font(paths: &[PathBuf]) -> std::result::Result<PathBuf, String> {
        for path in paths {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            // plotters keeps registered fonts for the life of the process
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            match register_font("sans-serif", FontStyle::Normal, bytes) {
                Ok(()) => return Ok(path.clone()),
                Err(_) => log::debug!("Skipping font {}: not a usable TrueType font", path.display()),
            }
        }
        Err(format!("No usable font among {:?}", paths))
    }

    fn draw(&self, data: &DashboardData) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let output: &Path = &self.config.output;
        let root = BitMapBackend::new(output, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let root = root.titled(&self.config.title, ("sans-serif", 36))?;
        let areas = root.split_evenly((2, 3));
        for (area, panel) in areas.iter().zip(&data.panels) {
            Self::draw_panel(area, panel, &data.periods)?;
        }

        root.present()?;
        Ok(())
    }

    fn draw_panel(
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        panel: &ChartPanel,
        periods: &[String],
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let x_max = periods.len().saturating_sub(1).max(1) as f64;
        let (y_min, y_max) = panel.y_range();

        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.25f64..x_max + 0.25, y_min..y_max)?;

        let period_label = |x: &f64| {
            let index = x.round();
            if (x - index).abs() < 1e-6 && index >= 0.0 {
                periods.get(index as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        };

        chart
            .configure_mesh()
            .x_labels(periods.len())
            .x_label_formatter(&period_label)
            .y_desc(panel.y_label.as_str())
            .draw()?;

        for (index, line) in panel.lines.iter().enumerate() {
            let color = PALETTE[index % PALETTE.len()];
            let segments = line.segments();
            let points: Vec<(f64, f64)> = segments.iter().flatten().copied().collect();

            chart
                .draw_series(
                    segments
                        .into_iter()
                        .map(|segment| PathElement::new(segment, color.stroke_width(2))),
                )?
                .label(line.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

            chart.draw_series(points.into_iter().map(|p| Circle::new(p, 3, color.filled())))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        Ok(())
    }
}
