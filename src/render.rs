use crate::chart::ChartSpec;
use crate::palette::Palette;
use crate::RenderOptions;
use anyhow::{Context, Result};
use image::ImageEncoder;
use plotters::prelude::*;

/// Render the grouped bar chart to PNG bytes.
pub fn render_png(spec: &ChartSpec, options: &RenderOptions) -> Result<Vec<u8>> {
    if spec.categories.is_empty() {
        anyhow::bail!("Cannot render a chart with no categories");
    }
    if spec.series.is_empty() {
        anyhow::bail!("Cannot render a chart with no series");
    }
    for series in &spec.series {
        if series.values.len() != spec.categories.len() {
            anyhow::bail!(
                "Series '{}' has {} values for {} categories",
                series.label,
                series.values.len(),
                spec.categories.len()
            );
        }
    }

    let mut buffer = vec![0u8; (options.width * options.height * 3) as usize];
    draw(spec, &mut buffer, options.width, options.height)?;

    let mut png_bytes = Vec::new();
    {
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(
                &buffer,
                options.width,
                options.height,
                image::ColorType::Rgb8,
            )
            .context("Failed to encode PNG")?;
    }
    Ok(png_bytes)
}

fn draw(spec: &ChartSpec, buffer: &mut [u8], width: u32, height: u32) -> Result<()> {
    let root = BitMapBackend::with_buffer(buffer, (width, height)).into_drawing_area();
    root.fill(&WHITE).context("Failed to fill background")?;

    let num_categories = spec.categories.len();
    let num_series = spec.series.len();
    let x_range = 0.0..(num_categories as f64);

    // Bars grow from zero; pad the top so the tallest bar clears the
    // frame. An all-zero spec still gets a drawable range.
    let max_value = spec
        .series
        .iter()
        .flat_map(|series| series.values.iter())
        .cloned()
        .fold(0.0_f64, f64::max);
    let y_max = if max_value <= 0.0 { 1.0 } else { max_value * 1.05 };

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(spec.title.as_str(), ("sans-serif", 20))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, 0.0..y_max)
        .context("Failed to build chart")?;

    let categories = &spec.categories;
    chart
        .configure_mesh()
        .x_labels(num_categories)
        .x_label_formatter(&|x| {
            let idx = *x as usize;
            if idx < categories.len() {
                categories[idx].clone()
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|value| format!("${:.2}", value))
        .x_desc(spec.category_label.as_str())
        .y_desc(spec.value_label.as_str())
        .draw()
        .context("Failed to draw mesh")?;

    // Side-by-side bars: each category slot is split across the series.
    let palette = Palette::category10();
    let bar_width = 0.8 / num_series as f64;
    for (series_idx, series) in spec.series.iter().enumerate() {
        let color = palette.color(series_idx);
        let x_offset = (series_idx as f64 - (num_series as f64 - 1.0) / 2.0) * bar_width;

        let bars = series.values.iter().enumerate().map(|(cat_idx, &value)| {
            let x_center = cat_idx as f64 + 0.5 + x_offset;
            Rectangle::new(
                [
                    (x_center - bar_width / 2.0, 0.0),
                    (x_center + bar_width / 2.0, value),
                ],
                color.filled(),
            )
        });
        chart
            .draw_series(bars)
            .with_context(|| format!("Failed to draw bars for '{}'", series.label))?
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 4), (x + 8, y + 4)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .context("Failed to draw legend")?;

    root.present().context("Failed to present drawing")?;
    Ok(())
}
