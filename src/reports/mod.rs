use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use seoscore::api::{CatalogEntry, CatalogSummary};
use seoscore::realtime::{ProblemKind, RealTimeSeoAnalysis};
use seoscore::scorer::types::{ScoreProjection, SeoBreakdown, SeoIssue, SeoLevel, SeoSeverity};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn level_color(level: SeoLevel) -> Color {
    match level {
        SeoLevel::Excellent => Color::Green,
        SeoLevel::Good => Color::DarkGreen,
        SeoLevel::Average => Color::Yellow,
        SeoLevel::Poor => Color::DarkYellow,
        SeoLevel::Critical => Color::Red,
    }
}

fn severity_color(severity: SeoSeverity) -> Color {
    match severity {
        SeoSeverity::Critical => Color::Red,
        SeoSeverity::Warning => Color::Yellow,
        SeoSeverity::Info => Color::Cyan,
        SeoSeverity::Success => Color::Green,
    }
}

fn score_cell(score: f64) -> Cell {
    let cell = Cell::new(format!("{:.0}", score));
    if score >= 80.0 {
        cell.fg(Color::Green)
    } else if score < 40.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

pub fn print_criteria_table(entry: &CatalogEntry) {
    let result = &entry.result;
    let title = if entry.title.trim().is_empty() {
        format!("#{} (sans titre)", entry.index)
    } else {
        format!("#{} {}", entry.index, entry.title)
    };
    println!(
        "\n📦 {} : {}/100 ({})",
        title,
        result.overall,
        result.level.label()
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Critère").add_attribute(Attribute::Bold),
        Cell::new("Type"),
        Cell::new("Poids"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Problèmes"),
    ]);
    align_right(&mut table, 2..=4);

    for c in &result.criteria {
        table.add_row(vec![
            Cell::new(&c.label).add_attribute(Attribute::Bold),
            Cell::new(if c.is_bonus { "bonus" } else { "base" }),
            Cell::new(format!("{:.2}", c.weight)),
            score_cell(c.score),
            Cell::new(c.issues.len()),
        ]);
    }

    table.add_row(vec![
        Cell::new("GLOBAL").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(result.overall)
            .fg(level_color(result.level))
            .add_attribute(Attribute::Bold),
        Cell::new(result.issues.len()),
    ]);
    println!("{}", table);
}

pub fn print_issue_table(issues: &[SeoIssue]) {
    if issues.is_empty() {
        println!("✅ Aucun problème détecté.");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Gravité").add_attribute(Attribute::Bold),
        Cell::new("Champ"),
        Cell::new("Problème"),
        Cell::new("Recommandation"),
    ]);

    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.severity).fg(severity_color(issue.severity)),
            Cell::new(issue.field),
            Cell::new(format!("{}\n{}", issue.title, issue.description)),
            Cell::new(issue.recommendation.as_deref().unwrap_or("-")),
        ]);
    }
    println!("{}", table);
}

pub fn print_breakdown_table(b: &SeoBreakdown) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Bloc").add_attribute(Attribute::Bold),
        Cell::new("Points /25").fg(Color::Cyan),
    ]);
    align_right(&mut table, 1..=1);

    for (name, points) in [
        ("Titres", b.titles),
        ("Descriptions", b.descriptions),
        ("Images", b.images),
        ("Technique", b.technical),
    ] {
        table.add_row(vec![Cell::new(name).add_attribute(Attribute::Bold), Cell::new(points)]);
    }
    println!("{}", table);
}

pub fn print_catalog_summary(summary: &CatalogSummary) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("CATALOGUE ({} produits)", summary.products))
            .add_attribute(Attribute::Bold),
        Cell::new("Nombre"),
    ]);
    align_right(&mut table, 1..=1);

    for level in SeoLevel::iter() {
        let count = summary
            .per_level
            .get(&level.to_string())
            .copied()
            .unwrap_or(0);
        table.add_row(vec![
            Cell::new(level.label()).fg(level_color(level)),
            Cell::new(count),
        ]);
    }
    table.add_row(vec![
        Cell::new("Score moyen").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", summary.average_overall)).add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);
}

pub fn print_projection(p: &ScoreProjection) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Projection : {}", p.field)).add_attribute(Attribute::Bold),
        Cell::new("Avant"),
        Cell::new("Après"),
        Cell::new("Delta"),
    ]);
    align_right(&mut table, 1..=3);

    let delta_color = match p.delta {
        d if d > 0 => Color::Green,
        d if d < 0 => Color::Red,
        _ => Color::White,
    };
    table.add_row(vec![
        Cell::new("Score global").add_attribute(Attribute::Bold),
        Cell::new(p.before),
        Cell::new(p.after),
        Cell::new(format!("{:+}", p.delta)).fg(delta_color),
    ]);
    table.add_row(vec![
        Cell::new("Score du champ"),
        Cell::new(format!("{:.0}", p.field_before)),
        Cell::new(format!("{:.0}", p.field_after)),
        Cell::new(format!("{:+.0}", p.field_after - p.field_before)),
    ]);
    println!("\n{}", table);
}

pub fn print_realtime_report(a: &RealTimeSeoAnalysis) {
    println!(
        "\n📝 {} mots, {} caractères, {} min de lecture",
        a.word_count, a.char_count, a.read_time_minutes
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Axe").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    align_right(&mut table, 1..=1);
    for (name, score) in [
        ("Mots-clés", a.scores.keyword),
        ("Lisibilité", a.scores.readability),
        ("Structure", a.scores.structure),
        ("Meta", a.scores.meta),
    ] {
        table.add_row(vec![Cell::new(name), score_cell(score as f64)]);
    }
    table.add_row(vec![
        Cell::new("GLOBAL").add_attribute(Attribute::Bold),
        Cell::new(a.scores.overall).add_attribute(Attribute::Bold),
    ]);
    println!("{}", table);

    if !a.keywords.is_empty() {
        let mut kw = new_table();
        kw.add_row(vec![
            Cell::new("Mot-clé").add_attribute(Attribute::Bold),
            Cell::new("Occ."),
            Cell::new("Densité %"),
            Cell::new("Titre"),
            Cell::new("Intertitres"),
            Cell::new("Intro"),
        ]);
        align_right(&mut kw, 1..=2);
        let flag = |b: bool| if b { "oui" } else { "non" };
        for k in &a.keywords {
            kw.add_row(vec![
                Cell::new(&k.keyword).add_attribute(Attribute::Bold),
                Cell::new(k.occurrences),
                Cell::new(format!("{:.2}", k.density)),
                Cell::new(flag(k.in_title)),
                Cell::new(flag(k.in_headings)),
                Cell::new(flag(k.in_first_paragraph)),
            ]);
        }
        println!("{}", kw);
    }

    let mut problems = new_table();
    problems.add_row(vec![
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Catégorie"),
        Cell::new("Message"),
        Cell::new("Suggestion"),
    ]);
    for p in &a.problems {
        let color = match p.kind {
            ProblemKind::Error => Color::Red,
            ProblemKind::Warning => Color::Yellow,
            ProblemKind::Info => Color::Cyan,
            ProblemKind::Success => Color::Green,
        };
        problems.add_row(vec![
            Cell::new(p.kind).fg(color),
            Cell::new(p.category),
            Cell::new(&p.message),
            Cell::new(p.suggestion.as_deref().unwrap_or("-")),
        ]);
    }
    println!("{}", problems);
}
