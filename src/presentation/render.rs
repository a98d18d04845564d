use crate::domain::error::TrendError;
use crate::domain::model::{ContentRecord, DateBucket, ViewState};
use crate::presentation::theme::Theme;
use chrono::NaiveDate;
use std::fmt::Write;

const SKELETON_ROWS: usize = 3;

/// Format the whole view as terminal text
pub fn render_view(view: &ViewState, theme: &Theme, enable_emoji: bool) -> String {
    let mut output = String::new();

    writeln!(output, "{}", (theme.heading)("Trending content")).ok();
    writeln!(output, "{}", filter_bar(view.query.bucket, theme)).ok();
    writeln!(output).ok();

    if view.initial_load && view.loading {
        render_skeleton(&mut output, theme);
        return output;
    }

    if let Some(error) = &view.last_error {
        let mark = if enable_emoji { "✘ " } else { "" };
        let notice = format!("{}{}. Please try again later.", mark, error);
        writeln!(output, "  {}", (theme.error)(&notice)).ok();
        writeln!(output).ok();
    }

    if !view.loading && view.last_error.is_none() && view.items.is_empty() {
        render_empty(&mut output, view.query.bucket, theme, enable_emoji);
    }

    for (i, item) in view.items.iter().enumerate() {
        render_card(&mut output, i + 1, item, theme, enable_emoji);
    }

    if view.loading && !view.items.is_empty() {
        let spinner = if enable_emoji { "⟳ " } else { "" };
        writeln!(output, "  {}", (theme.hint)(&format!("{}loading...", spinner))).ok();
    }

    if !view.loading && view.has_more && !view.items.is_empty() {
        writeln!(output).ok();
        writeln!(output, "  {}", (theme.hint)("Load more: type `more`")).ok();
    }

    output
}

/// Items as pretty JSON
pub fn render_json(items: &[ContentRecord]) -> Result<String, TrendError> {
    Ok(serde_json::to_string_pretty(items)?)
}

fn filter_bar(current: DateBucket, theme: &Theme) -> String {
    DateBucket::ALL
        .iter()
        .map(|bucket| {
            if *bucket == current {
                (theme.active)(bucket.as_str())
            } else {
                (theme.inactive)(bucket.as_str())
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_skeleton(output: &mut String, theme: &Theme) {
    let bar = "░".repeat(32);
    for _ in 0..SKELETON_ROWS {
        writeln!(output, "  {}", (theme.line)(&bar)).ok();
    }
    writeln!(output, "  {}", (theme.hint)("Loading trending content...")).ok();
}

fn render_empty(output: &mut String, bucket: DateBucket, theme: &Theme, enable_emoji: bool) {
    let mark = if enable_emoji { "💡 " } else { "" };
    writeln!(
        output,
        "  {}",
        (theme.title)(&format!("{}No trending content {}", mark, bucket.label()))
    )
    .ok();
    writeln!(output, "  Try another time window or come back later.").ok();

    // 只推荐更宽的时间窗口
    for other in [DateBucket::Week, DateBucket::Month] {
        if other != bucket {
            writeln!(
                output,
                "    {}",
                (theme.hint)(&format!("→ try `{}`", other.as_str()))
            )
            .ok();
        }
    }
}

fn render_card(
    output: &mut String,
    idx: usize,
    item: &ContentRecord,
    theme: &Theme,
    enable_emoji: bool,
) {
    writeln!(
        output,
        "  {}. {}",
        (theme.idx)(&idx.to_string()),
        (theme.title)(&item.title)
    )
    .ok();

    let labels = if enable_emoji {
        ["👁", "👍", "👎", "💬"]
    } else {
        ["views", "likes", "dislikes", "comments"]
    };
    let counts = [
        item.view_count,
        item.like_count,
        item.dislike_count,
        item.comment_count,
    ];
    let counters = labels
        .iter()
        .zip(counts)
        .map(|(label, count)| format!("{} {}", label, (theme.count)(&count.to_string())))
        .collect::<Vec<_>>()
        .join("  ");

    writeln!(
        output,
        "     {}   {}",
        counters,
        (theme.date)(&display_date(&item.published_at))
    )
    .ok();
}

/// `2024-03-05` becomes `05/03/2024`; anything unparsable is shown as-is
fn display_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
