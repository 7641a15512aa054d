mod portfolio;

pub use portfolio::{Education, Experience, Photo, PortfolioData, Project, ProjectKind};
