//! Plain-text résumé export.

use crate::models::resume::{ResumeRecord, Sections};
use crate::resume::dates::format_month_year;

fn contact_block(data: &ResumeRecord, out: &mut String) {
    let contact = &data.contact;
    out.push_str(&format!("{}\n", contact.name.to_uppercase()));

    let location = if !contact.city.is_empty() && !contact.state.is_empty() {
        format!("{}, {}", contact.city, contact.state)
    } else {
        String::new()
    };
    let parts: Vec<&str> = [contact.email.as_str(), contact.phone.as_str(), location.as_str()]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
    if !parts.is_empty() {
        out.push_str(&parts.join(" | "));
        out.push('\n');
    }
    out.push('\n');
}

fn experience_block(data: &ResumeRecord, out: &mut String) {
    out.push_str("WORK EXPERIENCE\n");
    for exp in &data.experience {
        let end = if exp.current {
            "Present".to_string()
        } else {
            format_month_year(&exp.end_date)
        };
        out.push_str(&format!("{} | {}\n", exp.title, exp.company));
        out.push_str(&format!("{} - {}\n", format_month_year(&exp.start_date), end));
        for bullet in &exp.bullets {
            out.push_str(&format!("• {bullet}\n"));
        }
        out.push('\n');
    }
}

fn education_block(data: &ResumeRecord, out: &mut String) {
    out.push_str("EDUCATION\n");
    for edu in &data.education {
        let field = if edu.field.is_empty() {
            String::new()
        } else {
            format!(" in {}", edu.field)
        };
        let gpa = if edu.gpa.is_empty() {
            String::new()
        } else {
            format!(" | GPA: {}", edu.gpa)
        };
        out.push_str(&format!("{}{field} | {}\n", edu.degree, edu.school));
        out.push_str(&format!("{}{gpa}\n\n", format_month_year(&edu.graduation_date)));
    }
}

fn skills_block(data: &ResumeRecord, out: &mut String) {
    let skills = &data.skills;
    out.push_str("SKILLS\n");
    for (label, list) in [
        ("Technical", &skills.technical),
        ("Soft Skills", &skills.soft),
        ("Industry", &skills.industry),
    ] {
        if !list.is_empty() {
            out.push_str(&format!("{label}: {}\n", list.join(", ")));
        }
    }
    out.push('\n');
}

fn certifications_block(data: &ResumeRecord, out: &mut String) {
    out.push_str("CERTIFICATIONS / LICENSES\n");
    for cert in &data.certifications {
        out.push_str(&cert.name);
        if !cert.license_number.is_empty() {
            out.push_str(&format!(" | License #: {}", cert.license_number));
        }
        if !cert.issuer.is_empty() {
            out.push_str(&format!(" | {}", cert.issuer));
        }
        if !cert.date.is_empty() {
            out.push_str(&format!(" | {}", format_month_year(&cert.date)));
        }
        out.push('\n');
    }
    out.push('\n');
}

fn references_block(data: &ResumeRecord, out: &mut String) {
    let refs = &data.references;
    if refs.available {
        out.push_str("REFERENCES\nAvailable upon request\n");
    } else if !refs.list.is_empty() {
        out.push_str("REFERENCES\n");
        for r in &refs.list {
            out.push_str(&format!("{} | {} at {}\n", r.name, r.title, r.company));
            out.push_str(&format!("{} | {}\n\n", r.phone, r.email));
        }
    }
}

/// Renders the enabled, non-empty sections as ATS-friendly plain text.
pub fn render_plain_text(sections: &Sections, data: &ResumeRecord) -> String {
    let mut out = String::new();

    if sections.is_enabled("contact") && !data.contact.name.is_empty() {
        contact_block(data, &mut out);
    }

    if sections.is_enabled("summary") && !data.summary.is_empty() {
        out.push_str(&format!("SUMMARY\n{}\n\n", data.summary));
    }

    if sections.is_enabled("experience") && !data.experience.is_empty() {
        experience_block(data, &mut out);
    }

    if sections.is_enabled("education") && !data.education.is_empty() {
        education_block(data, &mut out);
    }

    if sections.is_enabled("skills") && !data.skills.is_empty() {
        skills_block(data, &mut out);
    }

    if sections.is_enabled("certifications") && !data.certifications.is_empty() {
        certifications_block(data, &mut out);
    }

    if sections.is_enabled("clearances") && !data.clearances.is_empty() {
        out.push_str("SECURITY CLEARANCES\n");
        for cl in &data.clearances {
            let expires = if cl.expiration_date.is_empty() {
                String::new()
            } else {
                format!(" | Expires: {}", format_month_year(&cl.expiration_date))
            };
            out.push_str(&format!("{} | {}{expires}\n", cl.level, cl.status));
        }
        out.push('\n');
    }

    if sections.is_enabled("military") && !data.military.is_empty() {
        out.push_str("MILITARY SERVICE\n");
        for m in &data.military {
            out.push_str(&format!("{} | {} | {}\n", m.branch, m.rank, m.dates));
        }
        out.push('\n');
    }

    if sections.is_enabled("languages") && !data.languages.is_empty() {
        out.push_str("LANGUAGES\n");
        for l in &data.languages {
            out.push_str(&format!("{} - {}\n", l.language, l.proficiency));
        }
        out.push('\n');
    }

    if sections.is_enabled("awards") && !data.awards.is_empty() {
        out.push_str("AWARDS & HONORS\n");
        for a in &data.awards {
            if a.date.is_empty() {
                out.push_str(&format!("{}\n", a.award));
            } else {
                out.push_str(&format!("{} | {}\n", a.award, a.date));
            }
        }
        out.push('\n');
    }

    if sections.is_enabled("references") {
        references_block(data, &mut out);
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        Certification, EducationEntry, ExperienceEntry, Reference, References, SectionToggle,
    };

    fn enable(sections: &mut Sections, keys: &[&str]) {
        for key in keys {
            sections.0.insert(
                key.to_string(),
                SectionToggle {
                    enabled: true,
                    label: key.to_string(),
                },
            );
        }
    }

    fn sample() -> ResumeRecord {
        let mut data = ResumeRecord::default();
        data.contact.name = "Jane Doe".into();
        data.contact.email = "jane@example.com".into();
        data.contact.city = "Austin".into();
        data.contact.state = "TX".into();
        data.summary = "Backend engineer.".into();
        data.experience.push(ExperienceEntry {
            title: "Engineer".into(),
            company: "Acme".into(),
            start_date: "2021-04".into(),
            current: true,
            bullets: vec!["Shipped things".into()],
            ..Default::default()
        });
        data.education.push(EducationEntry {
            degree: "BS".into(),
            field: "Physics".into(),
            school: "State U".into(),
            graduation_date: "May 2019".into(),
            gpa: "3.8".into(),
        });
        data.skills.technical = vec!["Rust".into(), "SQL".into()];
        data.skills.industry = vec!["Fintech".into()];
        data
    }

    #[test]
    fn test_default_sections_render() {
        let text = render_plain_text(&Sections::default(), &sample());
        let expected = "JANE DOE\n\
            jane@example.com | Austin, TX\n\
            \n\
            WORK EXPERIENCE\n\
            Engineer | Acme\n\
            Apr 2021 - Present\n\
            • Shipped things\n\
            \n\
            EDUCATION\n\
            BS in Physics | State U\n\
            May 2019 | GPA: 3.8\n\
            \n\
            SKILLS\n\
            Technical: Rust, SQL\n\
            Industry: Fintech";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_disabled_sections_are_skipped() {
        // summary is off by default
        let text = render_plain_text(&Sections::default(), &sample());
        assert!(!text.contains("SUMMARY"));

        let mut sections = Sections::default();
        enable(&mut sections, &["summary"]);
        let text = render_plain_text(&sections, &sample());
        assert!(text.contains("SUMMARY\nBackend engineer.\n"));
    }

    #[test]
    fn test_certifications_optional_parts() {
        let mut data = ResumeRecord::default();
        data.certifications.push(Certification {
            name: "A&P".into(),
            license_number: "12345".into(),
            issuer: "FAA".into(),
            ..Default::default()
        });
        let mut sections = Sections::default();
        enable(&mut sections, &["certifications"]);
        let text = render_plain_text(&sections, &data);
        assert_eq!(text, "CERTIFICATIONS / LICENSES\nA&P | License #: 12345 | FAA");
    }

    #[test]
    fn test_references() {
        let mut sections = Sections::default();
        enable(&mut sections, &["references"]);

        let data = ResumeRecord::default();
        assert_eq!(
            render_plain_text(&sections, &data),
            "REFERENCES\nAvailable upon request"
        );

        let mut data = ResumeRecord::default();
        data.references = References {
            available: false,
            list: vec![Reference {
                name: "Bob".into(),
                title: "CTO".into(),
                company: "Acme".into(),
                phone: "555".into(),
                email: "bob@acme.io".into(),
                relationship: "Manager".into(),
            }],
        };
        assert_eq!(
            render_plain_text(&sections, &data),
            "REFERENCES\nBob | CTO at Acme\n555 | bob@acme.io"
        );
    }

    #[test]
    fn test_empty_document_renders_empty() {
        assert_eq!(render_plain_text(&Sections::default(), &ResumeRecord::default()), "");
    }
}
