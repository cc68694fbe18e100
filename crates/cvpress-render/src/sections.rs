use cvpress_types::{EducationProgram, Job, Resume, Skill};

use crate::builder::DocumentBuilder;
use crate::date::format_date_range;
use crate::markup::{Markup, MarkdownMarkup, PlainMarkup, Span};

const PROFESSIONAL_SUMMARY: &str = "Professional Summary";
const WORK_EXPERIENCE: &str = "Work Experience";
const TECHNICAL_SKILLS: &str = "Technical Skills";
const EDUCATION: &str = "Education";

/// Renders a résumé with Markdown decorations.
pub fn render_markdown(resume: &Resume) -> String {
    render(resume, &MarkdownMarkup)
}

/// Renders a résumé as plain text: identical content, no markup.
pub fn render_plain(resume: &Resume) -> String {
    render(resume, &PlainMarkup)
}

/// Renders a résumé through the given markup variant.
///
/// Five sections are emitted in fixed order: header, summary, work
/// experience, technical skills, education. A section backed by an
/// empty list is omitted entirely; the summary heading always appears.
pub fn render(resume: &Resume, markup: &dyn Markup) -> String {
    let mut doc = DocumentBuilder::new();

    render_header(&mut doc, markup, resume);
    render_summary(&mut doc, markup, resume.summary.as_deref(), &resume.highlights);
    render_jobs(&mut doc, markup, &resume.work);
    render_skills(&mut doc, markup, &resume.skills);
    render_education(&mut doc, markup, &resume.education);

    doc.finish()
}

fn render_header(doc: &mut DocumentBuilder, markup: &dyn Markup, resume: &Resume) {
    doc.append_line(&markup.heading(1, &resume.name));
    doc.append_line(&markup.heading(3, &resume.label));
    doc.blank_line();

    let email = markup.link(&resume.email, &format!("mailto:{}", resume.email));
    let phone = markup.link(&resume.phone, &format!("tel:{}", tel_target(&resume.phone)));
    doc.append_line(&markup.quote(&format!("{} | {}{}", email, phone, markup.hard_break())));

    if let Some(website) = resume.website.as_deref()
        && !website.is_empty()
    {
        let line = format!("{}{}", markup.link(website, website), markup.hard_break());
        doc.append_line(&markup.quote(&line));
    }

    let location = &resume.location;
    doc.append_line(&markup.quote(&format!(
        "{}, {}, {}, {}",
        field(&location.street),
        field(&location.city),
        field(&location.region),
        field(&location.postal_code),
    )));
    doc.blank_line();
}

fn render_summary(
    doc: &mut DocumentBuilder,
    markup: &dyn Markup,
    summary: Option<&str>,
    highlights: &[String],
) {
    section_heading(doc, markup, PROFESSIONAL_SUMMARY);

    if let Some(text) = summary
        && !text.is_empty()
    {
        doc.blank_line();
        doc.append_line(text);
    }

    render_highlights(doc, highlights);
}

fn render_jobs(doc: &mut DocumentBuilder, markup: &dyn Markup, jobs: &[Job]) {
    if jobs.is_empty() {
        return;
    }

    doc.blank_line();
    section_heading(doc, markup, WORK_EXPERIENCE);

    for job in jobs {
        doc.blank_line();
        render_job(doc, markup, job);
    }
}

fn render_job(doc: &mut DocumentBuilder, markup: &dyn Markup, job: &Job) {
    doc.append_line(&format!(
        "{}, {}{}",
        markup.span(Span::Bold, &job.position),
        markup.span(Span::BoldItalic, &job.company),
        markup.hard_break(),
    ));
    doc.append_line(&format!(
        "{}, {}{}",
        field(&job.location.city),
        field(&job.location.region),
        markup.hard_break(),
    ));
    doc.append_line(&markup.span(Span::Italic, &format_date_range(job.start_date, job.end_date)));

    if let Some(summary) = job.summary.as_deref()
        && !summary.is_empty()
    {
        doc.blank_line();
        doc.append_line(summary);
    }

    render_highlights(doc, &job.highlights);
}

fn render_skills(doc: &mut DocumentBuilder, markup: &dyn Markup, skills: &[Skill]) {
    if skills.is_empty() {
        return;
    }

    doc.blank_line();
    section_heading(doc, markup, TECHNICAL_SKILLS);
    doc.blank_line();

    for skill in skills {
        doc.append(&format!("- {}", skill.name));
        if !skill.keywords.is_empty() {
            doc.append(&format!(" – {}", skill.keywords.join(", ")));
        }
        doc.blank_line();
    }
}

fn render_education(doc: &mut DocumentBuilder, markup: &dyn Markup, programs: &[EducationProgram]) {
    if programs.is_empty() {
        return;
    }

    doc.blank_line();
    section_heading(doc, markup, EDUCATION);

    for program in programs {
        doc.blank_line();
        render_program(doc, markup, program);
    }
}

fn render_program(doc: &mut DocumentBuilder, markup: &dyn Markup, program: &EducationProgram) {
    doc.append_line(&format!(
        "{}, {}, {}{}",
        markup.span(Span::Bold, &program.area),
        markup.span(Span::Bold, &program.study_type),
        markup.span(Span::BoldItalic, &program.institution),
        markup.hard_break(),
    ));
    doc.append_line(&format!(
        "{}, {}{}",
        field(&program.location.city),
        field(&program.location.region),
        markup.hard_break(),
    ));
    doc.append_line(&markup.span(
        Span::Italic,
        &format_date_range(program.start_date, program.end_date),
    ));

    render_highlights(doc, &program.highlights);
}

/// Emits a blank line then one bulleted line per entry. Bullets are
/// content shared by both variants, not decoration.
fn render_highlights(doc: &mut DocumentBuilder, highlights: &[String]) {
    if highlights.is_empty() {
        return;
    }

    doc.blank_line();

    for highlight in highlights {
        doc.append_line(&format!("- {}", highlight));
    }
}

/// Section titles are case-folded to upper case here, in one place, for
/// both variants. The fold is part of the output contract.
fn section_heading(doc: &mut DocumentBuilder, markup: &dyn Markup, title: &str) {
    doc.append_line(&markup.heading(2, &title.to_uppercase()));
}

/// Link targets keep digits and a leading plus; spaces, dashes, dots and
/// parentheses are dropped.
fn tel_target(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
