//! Seeded freelancer profiles

use std::sync::LazyLock;

use crate::models::Freelancer;

fn freelancer(
    id: &str,
    name: &str,
    title: &str,
    location: &str,
    hourly_rate: f64,
    rating: f32,
    skills: &[&str],
    is_available: bool,
) -> Freelancer {
    Freelancer {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        avatar: None,
        location: location.to_string(),
        hourly_rate,
        rating,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        is_available,
    }
}

static FREELANCERS: LazyLock<Vec<Freelancer>> = LazyLock::new(|| {
    vec![
        freelancer(
            "fl-1",
            "John Developer",
            "Full-stack Web Developer",
            "Lisbon, Portugal",
            65.0,
            4.8,
            &["React", "Node.js", "PostgreSQL"],
            true,
        ),
        freelancer(
            "fl-2",
            "Sarah Designer",
            "Product & UI Designer",
            "Berlin, Germany",
            55.0,
            4.6,
            &["Figma", "Design Systems", "Prototyping"],
            true,
        ),
        freelancer(
            "fl-3",
            "Mike SEO Expert",
            "SEO & Growth Consultant",
            "Remote",
            48.0,
            4.4,
            &["SEO", "Analytics", "Content Strategy"],
            false,
        ),
        freelancer(
            "fl-5",
            "Alex Writer",
            "Technical Content Writer",
            "Toronto, Canada",
            40.0,
            4.9,
            &["Technical Writing", "Editing", "Documentation"],
            true,
        ),
    ]
});

/// All seeded freelancer profiles.
pub fn freelancers() -> &'static [Freelancer] {
    &FREELANCERS
}

/// Look up a freelancer by id.
pub fn freelancer_by_id(freelancer_id: &str) -> Option<&'static Freelancer> {
    FREELANCERS.iter().find(|f| f.id == freelancer_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freelancer_lookup() {
        let alex = freelancer_by_id("fl-5").unwrap();
        assert!(alex.skills.contains(&"Editing".to_string()));
        assert!(freelancer_by_id("fl-404").is_none());
    }
}
