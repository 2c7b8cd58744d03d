//! Portfolio gallery state
//!
//! Holds the category filter, the project open in the modal and the image
//! carousel for that project. Opening any project, including stepping to a
//! neighbouring one from inside the modal, restarts its images at index 0.

use crate::carousel::{Carousel, KeyOutcome, NavKey};
use crate::filter::{filter_by_category, CategoryFilter};
use crate::model::{Project, ProjectCategory};
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone)]
pub struct Gallery {
    projects: Vec<Project>,
    filter: CategoryFilter<ProjectCategory>,
    open: Option<usize>,
    images: Carousel,
}

impl Gallery {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            filter: CategoryFilter::All,
            open: None,
            images: Carousel::default(),
        }
    }

    pub fn filter(&self) -> CategoryFilter<ProjectCategory> {
        self.filter
    }

    /// Change the filter; an open project hidden by it is closed
    pub fn set_filter(&mut self, filter: CategoryFilter<ProjectCategory>) {
        self.filter = filter;
        if let Some(project) = self.open_project() {
            if !filter.matches(project.category) {
                self.close();
            }
        }
    }

    pub fn visible(&self) -> Vec<&Project> {
        filter_by_category(&self.projects, self.filter)
    }

    pub fn open(&mut self, project_id: &str) -> CoreResult<&Project> {
        let position = self
            .projects
            .iter()
            .position(|p| p.id == project_id)
            .ok_or_else(|| CoreError::NotFound(format!("project '{}'", project_id)))?;

        self.open_at(position);
        Ok(&self.projects[position])
    }

    fn open_at(&mut self, position: usize) {
        self.open = Some(position);
        self.images.reset(self.projects[position].images.len());
    }

    pub fn close(&mut self) {
        self.open = None;
        self.images.reset(0);
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_project(&self) -> Option<&Project> {
        self.open.map(|i| &self.projects[i])
    }

    pub fn image_index(&self) -> usize {
        self.images.index()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn current_image(&self) -> Option<&'static str> {
        self.open_project()
            .and_then(|p| p.images.get(self.images.index()).copied())
    }

    pub fn next_image(&mut self) -> usize {
        self.images.next()
    }

    pub fn prev_image(&mut self) -> usize {
        self.images.prev()
    }

    pub fn go_to_image(&mut self, index: usize) -> bool {
        self.images.go_to(index)
    }

    /// Step to the next visible project, wrapping at the end
    pub fn next_project(&mut self) -> Option<&Project> {
        self.step_project(true)
    }

    /// Step to the previous visible project, wrapping at the start
    pub fn prev_project(&mut self) -> Option<&Project> {
        self.step_project(false)
    }

    fn step_project(&mut self, forward: bool) -> Option<&Project> {
        let current = self.open?;
        let visible: Vec<usize> = self
            .projects
            .iter()
            .enumerate()
            .filter(|(_, p)| self.filter.matches(p.category))
            .map(|(i, _)| i)
            .collect();

        let at = visible.iter().position(|&i| i == current)?;
        let mut cursor = Carousel::new(visible.len());
        cursor.go_to(at);
        let target = if forward { cursor.next() } else { cursor.prev() };

        self.open_at(visible[target]);
        self.open_project()
    }

    /// Keyboard handling while the modal is open
    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        let outcome = self.images.handle_key(key);
        if outcome == KeyOutcome::Close {
            self.close();
        }
        outcome
    }
}
