use serde::{Deserialize, Serialize};

/// One project entry. `id` is unique within the collection and stable for
/// the item's lifetime; the neighbor-visibility rule keys off `id ± 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title_lines: Vec<String>,
    pub date: String,
    pub tags: Vec<String>,
    pub description: String,
}

/// The portfolio content, in display order.
pub fn all_projects() -> Vec<Project> {
    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    vec![
        Project {
            id: 1,
            title_lines: strings(&["FASST"]),
            date: "Oct 2024 - Mars 2025".to_string(),
            tags: strings(&[
                "React", "Node", "GraphQL", "Ramda", "Tailwind", "Radix-UI", "GitLab",
            ]),
            description: "Sales path and Dashboard for AMUNDI distributors".to_string(),
        },
        Project {
            id: 2,
            title_lines: strings(&["PATHFINDER"]),
            date: "Jun - Nov 2024".to_string(),
            tags: strings(&[
                "React",
                "React Router",
                "D3.JS",
                "TypeScript",
                "Vite",
                "Zustand",
                "GitLab",
            ]),
            description: "Graph Visualization Tool for BNP Paribas".to_string(),
        },
        Project {
            id: 3,
            title_lines: strings(&["LOAD AO"]),
            date: "Oct 2023 - Fev 2025".to_string(),
            tags: strings(&[
                "React",
                "TypeScript",
                "MUI",
                "TanStack",
                "Puppeteer",
                "Node",
                "AzureDevOps",
            ]),
            description: "Tool Managment for Sogeti".to_string(),
        },
        Project {
            id: 4,
            title_lines: strings(&["ABLA"]),
            date: "Mar 2023 - Dec 2024".to_string(),
            tags: strings(&["React", "React-DnD", "Chart.JS", "Chakra-UI", "GitHub"]),
            description: "AI transcription for repository Design".to_string(),
        },
    ]
}

/// Id that gets the initial auto-focus on desktop.
pub fn default_project_id() -> Option<u32> {
    all_projects().first().map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn project_ids_are_unique() {
        let projects = all_projects();
        let ids: HashSet<u32> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn default_focus_is_first_project() {
        assert_eq!(default_project_id(), Some(1));
    }

    #[test]
    fn every_project_has_display_content() {
        for p in all_projects() {
            assert!(!p.title_lines.is_empty(), "project {} has no title", p.id);
            assert!(!p.tags.is_empty(), "project {} has no tags", p.id);
            assert!(!p.description.is_empty());
        }
    }
}
