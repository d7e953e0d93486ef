//! Text Report Renderer
//!
//! Serializes a [`ChartAnalysis`] into the plain-text report. Output is a
//! pure function of the analysis: identical input, identical bytes.

use super::analysis::{
    AnnotatedStar, ChartAnalysis, DaYunAnalysis, PalaceAnalysis, PillarAnalysis,
};
use crate::domain::services::{DaYunStatus, HiddenStem, SihuaTargets};

pub const REPORT_TITLE: &str = "【命理深度分析报告 (八字+紫微)】";
pub const SEPARATOR: &str = "------------------------------------------------";
pub const NOT_STARTED: &str = "未起运";
pub const BEYOND_PERIODS: &str = "大运已过";

pub fn render_report(analysis: &ChartAnalysis) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Header
    lines.push(REPORT_TITLE.to_string());
    lines.push(format!(
        "公历: {} ({})",
        analysis.subject.birth.format("%Y/%-m/%-d %H:%M:%S"),
        analysis.subject.gender
    ));
    lines.push(format!("农历: {}", analysis.subject.lunar_text));
    lines.push(format!(
        "虚岁: {} | 流年: {} {}",
        analysis.temporal.virtual_age,
        analysis.temporal.today_lunar_year,
        analysis.temporal.annual_pillar
    ));
    lines.push(SEPARATOR.to_string());
    lines.push(String::new());

    // Part one: Eight Characters
    lines.push("## 第一部分：八字命盘".to_string());
    for pillar in &analysis.pillars {
        render_pillar(&mut lines, pillar);
    }
    lines.push(String::new());

    lines.push("### 大运".to_string());
    for period in &analysis.da_yun {
        lines.push(render_da_yun(period));
    }
    lines.push(format!("当前大运: {}", current_da_yun(analysis)));

    // Part two: Zi Wei
    lines.push(String::new());
    lines.push(SEPARATOR.to_string());
    lines.push("## 第二部分：紫微斗数".to_string());
    lines.push(String::new());

    if let Some(summary) = render_summary(analysis) {
        lines.push(summary);
        lines.push(String::new());
    }

    for palace in &analysis.palaces {
        render_palace(&mut lines, palace);
        lines.push(String::new());
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn render_hidden(hidden: &[HiddenStem]) -> String {
    hidden
        .iter()
        .map(|h| format!("{}<{}>", h.stem, h.ten_god))
        .collect::<Vec<_>>()
        .join(",")
}

fn render_pillar(lines: &mut Vec<String>, pillar: &PillarAnalysis) {
    let label = pillar.position.label();
    match pillar.ten_god {
        Some(ten_god) => {
            lines.push(format!("- {}柱: [{}]", label, pillar.pillar));
            lines.push(format!("  * 十神: {}", ten_god));
        }
        // Day pillar: its stem is the reference itself
        None => lines.push(format!("- {}柱: [{}] (★日元)", label, pillar.pillar)),
    }
    lines.push(format!("  * 藏干: {}", render_hidden(&pillar.hidden_stems)));
}

fn render_da_yun(period: &DaYunAnalysis) -> String {
    let mut line = format!(
        "[{}-{}岁] {}运 <{}>",
        period.period.start_age(),
        period.period.end_age(),
        period.period.pillar,
        period.ten_god
    );
    if period.is_active {
        line.push_str(" ★当前大运");
    }
    line
}

fn current_da_yun(analysis: &ChartAnalysis) -> String {
    match (analysis.temporal.da_yun, analysis.active_da_yun()) {
        (DaYunStatus::Active(_), Some(active)) => format!(
            "{}-{}岁 {}运",
            active.period.start_age(),
            active.period.end_age(),
            active.period.pillar
        ),
        (DaYunStatus::Beyond, _) => BEYOND_PERIODS.to_string(),
        _ => NOT_STARTED.to_string(),
    }
}

fn render_summary(analysis: &ChartAnalysis) -> Option<String> {
    let summary = &analysis.summary;
    let parts: Vec<String> = [
        ("五行局", &summary.five_elements_class),
        ("命主", &summary.soul),
        ("身主", &summary.body),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("{}: {}", label, v)))
    .collect();

    (!parts.is_empty()).then(|| parts.join(" | "))
}

/// Natal, then self, then incoming tag
fn render_star(star: &AnnotatedStar) -> String {
    let mut text = star.star.name.clone();
    if let Some(brightness) = star.star.brightness.as_deref().filter(|b| !b.is_empty()) {
        text.push_str(&format!("({})", brightness));
    }
    if let Some(kind) = star.star.mutagen {
        text.push_str(&format!("[生年{}]", kind));
    }
    if let Some(kind) = star.self_transformation {
        text.push_str(&format!("[离心{}]", kind));
    }
    if let Some(kind) = star.incoming_transformation {
        text.push_str(&format!("[向心{}]", kind));
    }
    text
}

fn render_sihua(targets: &SihuaTargets) -> String {
    let flows: Vec<String> = targets
        .pairs()
        .iter()
        .map(|(kind, star)| format!("{}{}", star, kind))
        .collect();
    format!("{}干 -> {}", targets.stem, flows.join("、"))
}

fn render_palace(lines: &mut Vec<String>, palace: &PalaceAnalysis) {
    let mut header = format!("### {} [{}]", palace.name, palace.pillar());
    if !palace.flags.is_empty() {
        let flags: Vec<&str> = palace.flags.iter().map(|f| f.label()).collect();
        header.push(' ');
        header.push_str(&flags.join(" "));
    }
    lines.push(header);

    let stars: Vec<String> = palace.stars.iter().map(render_star).collect();
    let stars = if stars.is_empty() {
        "无".to_string()
    } else {
        stars.join(", ")
    };
    lines.push(format!("  * 星曜: {}", stars));

    if !palace.stages.is_empty() {
        lines.push(format!("  * 十二神: {}", palace.stages.join(" | ")));
    }
    lines.push(format!("  * 飞化: {}", render_sihua(&palace.sihua)));
    lines.push(format!(
        "  * 大限: {} - {} 岁",
        palace.decadal.start, palace.decadal.end
    ));
}
