//! Built-in skill vocabularies and the autocomplete filter over them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Industry,
}

/// Max suggestions while typing.
const MAX_MATCHES: usize = 5;
/// Max quick picks shown for an empty input.
const MAX_QUICK_PICKS: usize = 6;

const TECHNICAL: &[&str] = &[
    // Languages
    "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "Go", "Rust", "PHP", "Ruby",
    "Kotlin", "Swift",
    // Web frameworks
    "React", "Vue.js", "Angular", "Next.js", "Node.js", "Express.js", "Django", "FastAPI",
    "Spring Boot", "ASP.NET",
    // Cloud & DevOps
    "AWS", "Azure", "Google Cloud Platform", "Docker", "Kubernetes", "Terraform", "CI/CD",
    "Jenkins", "GitHub Actions", "GitLab CI",
    // Databases
    "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch", "Apache Cassandra", "DynamoDB",
    "SQL",
    // Big data & streaming
    "Apache Kafka", "Apache Spark", "Hadoop", "Apache Flink",
    // Other
    "REST APIs", "GraphQL", "Microservices", "Linux/Unix", "Git", "Excel", "Power BI", "Tableau",
    "MATLAB", "R", "AutoCAD", "SolidWorks", "Figma", "Adobe Creative Suite", "Salesforce", "SAP",
    "Jira",
];

const SOFT: &[&str] = &[
    "Leadership", "Team Mentoring", "Communication", "Problem Solving", "Critical Thinking",
    "Project Management", "Teamwork", "Collaboration", "Agile Methodology", "Negotiation",
    "Adaptability", "Initiative", "Emotional Intelligence", "Conflict Resolution",
    "Decision Making", "Time Management", "Attention to Detail", "Presentation Skills",
    "Public Speaking", "Documentation", "Networking", "Active Listening", "Mentorship",
    "Coaching", "Delegation", "Strategic Planning", "Cross-functional Collaboration", "Empathy",
    "Flexibility", "Curiosity",
];

const INDUSTRY: &[&str] = &[
    // Methodologies
    "Agile/Scrum", "Kanban", "Waterfall", "Lean", "Six Sigma",
    // Architecture & design
    "Microservices Architecture", "System Design", "Database Design", "Cloud Architecture",
    "Enterprise Architecture", "Solution Architecture",
    // Quality & testing
    "Test Automation", "Unit Testing", "Integration Testing", "Selenium", "JUnit", "PyTest",
    "Test-Driven Development", "Performance Testing",
    // Specialized
    "Machine Learning", "Data Engineering", "Data Science", "Business Intelligence", "Analytics",
    "Security",
    // Compliance & standards
    "HIPAA", "SOC 2", "GDPR", "PCI-DSS", "ISO 27001",
    // DevOps & infrastructure
    "Infrastructure as Code", "Configuration Management", "Monitoring", "Logging",
    "Observability", "Database Administration",
];

const AVIATION: &[&str] = &[
    // Certifications
    "A&P License", "Airframe and Powerplant", "FAA Certificated", "IA", "Inspection Authorization",
    "Repairman Certificate", "FCC License", "GROL", "NDT Certification", "ASQ CQE", "ASQ CQA",
    // Regulatory
    "FAA", "EASA", "FAR", "Federal Aviation Regulations", "14 CFR", "Part 43", "Part 65",
    "Part 91", "Part 121", "Part 135", "Part 145", "Airworthiness Directive", "AD Compliance",
    "Service Bulletin", "Type Certificate", "STC", "PMA", "TSO", "DER", "DAR",
    // Maintenance types
    "Line Maintenance", "Base Maintenance", "Heavy Maintenance", "A Check", "B Check", "C Check",
    "D Check", "Phase Check", "Progressive Inspection", "100-Hour Inspection", "Annual Inspection",
    "AOG", "Aircraft on Ground",
    // Aircraft systems
    "Airframe", "Powerplant", "Avionics", "Electrical Systems", "Hydraulic Systems",
    "Pneumatic Systems", "Fuel Systems", "Flight Controls", "Landing Gear", "ECS", "APU",
    "Turbofan", "Turboprop",
    // Quality
    "Quality Control", "QC", "Quality Assurance", "QA", "QMS", "AS9100", "AS9110", "NADCAP",
    "First Article Inspection", "FAI", "Receiving Inspection", "In-Process Inspection", "SPC",
    // Safety
    "Safety Management System", "SMS", "Human Factors", "CRM", "MRM", "Just Culture",
    "Hazard Identification",
    // Skills
    "Troubleshooting", "Fault Isolation", "Blueprint Reading", "Schematic Interpretation",
    "Wiring Diagram Interpretation", "Sheet Metal Repair", "Composite Repair", "Corrosion Control",
    "NDT", "Borescope Inspection",
    // Software
    "AMOS", "TRAX", "Ramco", "Maximo", "Maintenix", "OASES",
    // Documentation
    "Aircraft Maintenance Manual", "AMM", "IPC", "CMM", "SRM", "MEL", "CDL",
    // Processes
    "Continuous Airworthiness", "Reliability Program", "Configuration Control",
    "Maintenance Planning",
];

/// Any of these in a job posting switches on the aviation vocabulary.
const AVIATION_TRIGGERS: &[&str] = &[
    "faa", "easa", "aircraft", "aviation", "airline", "aerospace", "a&p", "airframe",
    "powerplant", "avionics", "mro", "part 121", "part 135", "part 145", "airworthiness",
    "mechanic", "amt", "pilot", "flight", "hangar", "maintenance manual",
];

pub fn is_aviation_job(job_text: &str) -> bool {
    let lower = job_text.to_lowercase();
    AVIATION_TRIGGERS.iter().any(|t| lower.contains(t))
}

/// Vocabulary for `category`. Aviation postings put aviation terms ahead of
/// the general industry list, de-duplicated case-insensitively.
pub fn vocabulary(category: SkillCategory, job_text: &str) -> Vec<&'static str> {
    match category {
        SkillCategory::Technical => TECHNICAL.to_vec(),
        SkillCategory::Soft => SOFT.to_vec(),
        SkillCategory::Industry if is_aviation_job(job_text) => {
            let mut seen = HashSet::new();
            AVIATION
                .iter()
                .chain(INDUSTRY.iter())
                .copied()
                .filter(|s| seen.insert(s.to_lowercase()))
                .collect()
        }
        SkillCategory::Industry => INDUSTRY.to_vec(),
    }
}

/// Autocomplete over `vocabulary`, skipping skills already in `existing`.
///
/// With a blank `input` this returns quick picks; otherwise prefix matches
/// come before substring matches.
pub fn suggest_skills(vocabulary: &[&str], existing: &[String], input: &str) -> Vec<String> {
    let existing: HashSet<String> = existing.iter().map(|s| s.to_lowercase()).collect();
    let available = vocabulary
        .iter()
        .filter(|s| !existing.contains(&s.to_lowercase()));

    if input.trim().is_empty() {
        return available
            .take(MAX_QUICK_PICKS)
            .map(|s| s.to_string())
            .collect();
    }

    let needle = input.to_lowercase();
    let (prefix, rest): (Vec<&&str>, Vec<&&str>) =
        available.partition(|s| s.to_lowercase().starts_with(&needle));
    let contains = rest
        .into_iter()
        .filter(|s| s.to_lowercase().contains(&needle));

    prefix
        .into_iter()
        .chain(contains)
        .take(MAX_MATCHES)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aviation_detection() {
        assert!(is_aviation_job("A&P mechanic wanted for Part 145 repair station"));
        assert!(is_aviation_job("AIRCRAFT maintenance"));
        assert!(!is_aviation_job("Senior Rust engineer"));
        assert!(!is_aviation_job(""));
    }

    #[test]
    fn test_industry_vocabulary_merges_aviation_first() {
        let plain = vocabulary(SkillCategory::Industry, "backend role");
        assert_eq!(plain[0], "Agile/Scrum");

        let aviation = vocabulary(SkillCategory::Industry, "FAA certified avionics tech");
        assert_eq!(aviation[0], "A&P License");
        assert!(aviation.contains(&"Kanban"));
        assert_eq!(aviation.len(), AVIATION.len() + INDUSTRY.len());
    }

    #[test]
    fn test_technical_ignores_job_text() {
        assert_eq!(
            vocabulary(SkillCategory::Technical, "aviation"),
            TECHNICAL.to_vec()
        );
    }

    #[test]
    fn test_quick_picks_skip_existing() {
        let existing = vec!["python".to_string()];
        let picks = suggest_skills(TECHNICAL, &existing, "  ");
        assert_eq!(
            picks,
            vec!["JavaScript", "TypeScript", "Java", "C++", "C#", "Go"]
        );
    }

    #[test]
    fn test_prefix_matches_come_first() {
        let picks = suggest_skills(TECHNICAL, &[], "script");
        assert_eq!(picks, vec!["JavaScript", "TypeScript"]);

        let picks = suggest_skills(TECHNICAL, &[], "sql");
        assert_eq!(picks, vec!["SQL", "PostgreSQL", "MySQL"]);

        let picks = suggest_skills(SOFT, &[], "man");
        assert_eq!(picks, vec!["Project Management", "Time Management"]);
    }

    #[test]
    fn test_matches_capped_at_five() {
        let picks = suggest_skills(TECHNICAL, &[], "a");
        assert_eq!(picks.len(), MAX_MATCHES);
        assert!(picks.iter().take(2).all(|p| p.to_lowercase().starts_with('a')));
    }
}
