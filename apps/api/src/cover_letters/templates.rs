//! Cover-letter starter templates filled from the résumé.

use serde::{Deserialize, Serialize};

use crate::models::cover_letter::JobInfo;
use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverLetterTemplate {
    Professional,
    Enthusiastic,
    Concise,
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn first_n(list: &[String], n: usize) -> &[String] {
    &list[..list.len().min(n)]
}

impl CoverLetterTemplate {
    pub fn render(&self, data: &ResumeRecord, job: &JobInfo) -> String {
        match self {
            CoverLetterTemplate::Professional => professional(data, job),
            CoverLetterTemplate::Enthusiastic => enthusiastic(data, job),
            CoverLetterTemplate::Concise => concise(data, job),
        }
    }
}

/// Default letter name for a generated draft, e.g. `Acme - Engineer`.
pub fn draft_name(job: &JobInfo) -> String {
    format!("{} - {}", or(&job.company, "New"), or(&job.title, "Cover Letter"))
}

/// Opening line, addressed to the hiring manager when one is known.
pub fn salutation(job: &JobInfo) -> String {
    format!("Dear {},", or(job.hiring_manager.trim(), "Hiring Manager"))
}

fn professional(data: &ResumeRecord, job: &JobInfo) -> String {
    let title = or(&job.title, "[Position]");
    let company = or(&job.company, "[Company]");
    let latest = data.experience.first();
    let field = latest.map(|e| e.title.as_str()).unwrap_or("");

    let role_paragraph = match latest {
        Some(exp) => {
            let achievement = exp
                .bullets
                .first()
                .map(|b| b.to_lowercase())
                .unwrap_or_else(|| "contributed significantly to the organization".to_string());
            format!("In my role as {} at {}, I {achievement}.", exp.title, exp.company)
        }
        None => "Throughout my career, I have developed strong skills that align with this position."
            .to_string(),
    };

    let skills_paragraph = if data.skills.technical.is_empty() {
        String::new()
    } else {
        format!(
            "My technical expertise includes {}, which I believe aligns well with your requirements.",
            first_n(&data.skills.technical, 5).join(", ")
        )
    };

    format!(
        "I am writing to express my strong interest in the {title} position at {company}. \
         With my background as a {} and proven track record of success, I am confident I would \
         be a valuable addition to your team.\n\n\
         {role_paragraph}\n\n\
         {skills_paragraph}\n\n\
         I am excited about the opportunity to bring my skills and experience to {}. \
         I would welcome the chance to discuss how I can contribute to your team's success.\n\n\
         Thank you for considering my application.",
        or(field, "[your field]"),
        or(&job.company, "your organization"),
    )
}

fn enthusiastic(data: &ResumeRecord, job: &JobInfo) -> String {
    let title = or(&job.title, "[Position]");
    let company = or(&job.company, "[Company]");
    let latest_title = data
        .experience
        .first()
        .map(|e| e.title.as_str())
        .unwrap_or("");
    let passion = if latest_title.is_empty() {
        "this field".to_string()
    } else {
        latest_title.to_lowercase()
    };

    let intro = if data.summary.is_empty() {
        format!(
            "With experience as a {}, I bring both expertise and enthusiasm to every project I undertake.",
            or(latest_title, "professional")
        )
    } else {
        data.summary.clone()
    };

    let skills_sentence = if data.skills.technical.is_empty() {
        String::new()
    } else {
        format!(
            "I am particularly eager to apply my skills in {}.",
            first_n(&data.skills.technical, 3).join(" and ")
        )
    };

    format!(
        "I was thrilled to discover the {title} opening at {company}! This role perfectly matches \
         my passion for {passion} and my career aspirations.\n\n\
         {intro}\n\n\
         What excites me most about this opportunity is the chance to contribute to {} while \
         continuing to grow professionally. {skills_sentence}\n\n\
         I would love the opportunity to discuss how my background and drive can benefit your \
         team. Thank you for your time and consideration!",
        or(&job.company, "an innovative organization"),
    )
}

fn concise(data: &ResumeRecord, job: &JobInfo) -> String {
    let title = or(&job.title, "[Position]");
    let company = or(&job.company, "[Company]");

    let mut qualifications = vec![match data.experience.first() {
        Some(exp) => format!("• {} at {}", exp.title, exp.company),
        None => "• Relevant professional experience".to_string(),
    }];
    if let Some(edu) = data.education.first() {
        qualifications.push(format!("• {} from {}", edu.degree, edu.school));
    }
    if !data.skills.technical.is_empty() {
        qualifications.push(format!(
            "• Skills: {}",
            first_n(&data.skills.technical, 4).join(", ")
        ));
    }
    if let Some(cert) = data.certifications.first() {
        qualifications.push(format!("• {}", cert.name));
    }

    format!(
        "I am applying for the {title} role at {company}.\n\n\
         Key qualifications:\n{}\n\n\
         I am available for an interview at your convenience.",
        qualifications.join("\n")
    )
}
