use serde::Serialize;

use crate::depth::DEPTH_BUCKETS;

pub const LEGEND_POSITION: &str = "bottomright";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
}

/// Static depth legend control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
}

pub fn build_legend() -> Legend {
    let labels: Vec<&str> = DEPTH_BUCKETS.iter().map(|b| b.legend_label()).collect();

    let entries = DEPTH_BUCKETS
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let label = match labels.get(i + 1) {
                Some(next) => format!("{}\u{2013}{}", labels[i], next),
                None => format!("{}+", labels[i]),
            };
            LegendEntry {
                color: bucket.color(),
                label,
            }
        })
        .collect();

    Legend {
        position: LEGEND_POSITION,
        title: "Depth (km)",
        entries,
    }
}

impl Legend {
    /// Inner HTML of the legend `<div class="legend">`.
    pub fn to_html(&self) -> String {
        let mut html = format!("<h4>{}</h4>", self.title);
        let last = self.entries.len().saturating_sub(1);
        for (i, entry) in self.entries.iter().enumerate() {
            html.push_str(&format!(
                "<li style='background-color: {}'></li> {}",
                entry.color,
                entry.label.replace('\u{2013}', "&ndash;")
            ));
            if i < last {
                html.push_str("<br>");
            }
        }
        html
    }
}
