//! The SoundPlus++ CI/CD documentation, block by block.
//!
//! Literal data sits in the tables at the bottom of this file; the section
//! functions only decide order and which block helper renders each piece.

use super::{diagrams, Block, ParagraphBlock, Span};
use crate::document::{Alignment, CoreProperties};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "SoundPlus_CICD_Documentation.docx";

const PROJECT: &str = "SoundPlus++ Project";
const SUBTITLE: &str = "CI/CD Pipeline Design and Automation Documentation";

/// Metadata written to docProps/core.xml
pub fn properties() -> CoreProperties {
    CoreProperties {
        title: Some(format!("{} - {}", PROJECT, SUBTITLE)),
        subject: Some("CI/CD design and automation approach".into()),
        creator: Some("SoundPlus++".into()),
    }
}

/// The whole report, in page order
pub fn plan() -> Vec<Block> {
    [
        title_page(),
        contents(),
        introduction(),
        design_diagrams(),
        automation(),
        environment(),
        security(),
        conclusion(),
        appendix(),
    ]
    .concat()
}

fn title_page() -> Vec<Block> {
    vec![
        Block::title(PROJECT),
        Block::Paragraph(
            ParagraphBlock::new([Span::new(SUBTITLE).size(14.0).italic()]).align(Alignment::Center),
        ),
        Block::Paragraph(
            ParagraphBlock::new([
                Span::new("Premium Audio Equipment E-commerce Platform\n").bold(),
                Span::new("MERN Stack Application with Docker Containerization\n"),
                Span::new("Version 1.0 | January 2026"),
            ])
            .align(Alignment::Center),
        ),
        Block::PageBreak,
    ]
}

fn contents() -> Vec<Block> {
    let mut blocks = vec![Block::heading("Table of Contents", 1)];
    blocks.extend(CONTENTS.iter().map(|[item, page]| Block::toc_entry(item, page)));
    blocks.push(Block::PageBreak);
    blocks
}

fn introduction() -> Vec<Block> {
    vec![
        Block::heading("1. Introduction", 1),
        Block::heading("1.1 Project Overview", 2),
        Block::text(
            "SoundPlus++ is a premium audio equipment e-commerce platform built using the MERN stack \
             (MongoDB, Express.js, React, Node.js). The application provides a comprehensive online \
             shopping experience for audio enthusiasts, featuring product catalog management, user \
             authentication, shopping cart functionality, and order processing.",
        ),
        Block::text(
            "This document outlines the CI/CD (Continuous Integration/Continuous Deployment) design \
             and automation approach implemented for the SoundPlus++ application, ensuring reliable \
             and efficient software delivery.",
        ),
        Block::heading("1.2 Technology Stack Summary", 2),
        Block::table(["Layer", "Technology", "Version"], TECH_STACK),
        Block::PageBreak,
    ]
}

/// Heading, lead-in, diagram and caption for one figure
fn figure(heading: &str, lead: &str, diagram: &str, caption: &str) -> Vec<Block> {
    vec![
        Block::heading(heading, 2),
        Block::text(lead),
        Block::diagram(diagram),
        Block::text(caption),
        Block::PageBreak,
    ]
}

fn design_diagrams() -> Vec<Block> {
    let mut blocks = vec![Block::heading("2. Part 1: CI/CD Design Diagram", 1)];
    blocks.extend(figure(
        "2.1 Architecture Overview Diagram",
        "The following diagram illustrates the complete CI/CD architecture for the SoundPlus++ \
         application, showing all major components and their interconnections.",
        diagrams::ARCHITECTURE,
        "Figure 2.1: SoundPlus++ CI/CD Architecture Overview",
    ));
    blocks.extend(figure(
        "2.2 CI/CD Pipeline Flow Diagram",
        "This diagram shows the detailed flow of the CI/CD pipeline from code commit to deployment.",
        diagrams::PIPELINE_FLOW,
        "Figure 2.2: CI/CD Pipeline Flow",
    ));
    blocks.extend(figure(
        "2.3 Container Architecture Diagram",
        "The following diagram illustrates the Docker container architecture and internal \
         connectivity of the SoundPlus++ application.",
        diagrams::CONTAINERS,
        "Figure 2.3: Docker Container Architecture",
    ));
    blocks.extend(figure(
        "2.4 Component Connectivity Diagram",
        "This diagram details the connectivity between all application components \
         including frontend, backend, database, and external services.",
        diagrams::CONNECTIVITY,
        "Figure 2.4: Application Component Connectivity",
    ));

    blocks.push(Block::heading("2.5 Diagram Explanation", 2));
    blocks.push(Block::text(
        "The CI/CD architecture for SoundPlus++ consists of the following key components and their interactions:",
    ));
    for (heading, text) in EXPLANATIONS {
        blocks.push(Block::heading(*heading, 3));
        blocks.push(Block::text(*text));
    }
    blocks.push(Block::PageBreak);
    blocks
}

fn automation() -> Vec<Block> {
    vec![
        Block::heading("3. Part 2: Automation Approach", 1),
        Block::heading("3.1 DevOps Tools and Versions", 2),
        Block::text(
            "The following table describes all DevOps tools used in the SoundPlus++ deployment pipeline:",
        ),
        Block::table(["Tool", "Version", "Purpose"], DEVOPS_TOOLS),
        Block::PageBreak,
        Block::heading("3.2 Application Tools and Dependencies", 2),
        Block::heading("Frontend Dependencies", 3),
        Block::table(["Package", "Version", "Purpose"], FRONTEND_DEPS),
        Block::empty(),
        Block::heading("Backend Dependencies", 3),
        Block::table(["Package", "Version", "Purpose"], BACKEND_DEPS),
        Block::PageBreak,
        Block::heading("Database Configuration", 3),
        Block::table(["Component", "Value", "Description"], DATABASE),
        Block::empty(),
        Block::heading("Database Collections", 3),
        Block::table(["Collection", "Fields", "Purpose"], COLLECTIONS),
        Block::PageBreak,
        Block::heading("3.3 Jenkins Pipeline Stages", 2),
        Block::text(
            "The Jenkins pipeline (Jenkinsfile) automates the deployment process through the following stages:",
        ),
        Block::table(["Stage", "Name", "Description"], JENKINS_STAGES),
        Block::empty(),
        Block::heading("Jenkins Pipeline Configuration", 3),
        Block::table(["Parameter", "Value", "Description"], JENKINS_CONFIG),
        Block::PageBreak,
        Block::heading("3.4 GitHub Actions Pipeline", 2),
        Block::text(
            "GitHub Actions provides cloud-based CI/CD with the following workflow configuration:",
        ),
        Block::table(["Job Name", "Type", "Description"], ACTIONS_JOBS),
        Block::empty(),
        Block::heading("GitHub Actions Triggers", 3),
        Block::text(ACTIONS_TRIGGERS.join("\n")),
        Block::heading("Required GitHub Secrets", 3),
        Block::table(["Secret Name", "Purpose"], ACTIONS_SECRETS),
        Block::PageBreak,
        Block::heading("3.5 Deployment Automation Flow", 2),
        Block::text("The complete deployment automation follows this sequence:"),
        Block::table(["Step", "Action"], DEPLOY_FLOW),
        Block::empty(),
        Block::heading("Automation Scripts", 3),
        Block::table(["Script", "Purpose"], SCRIPTS),
        Block::PageBreak,
    ]
}

fn environment() -> Vec<Block> {
    vec![
        Block::heading("4. Environment Configuration", 1),
        Block::heading("Backend Environment Variables", 2),
        Block::table(["Variable", "Value", "Description"], BACKEND_ENV),
        Block::empty(),
        Block::heading("Frontend Environment Variables", 2),
        Block::table(["Variable", "Value", "Description"], FRONTEND_ENV),
        Block::empty(),
        Block::heading("Docker Compose Configuration", 2),
        Block::table(["Component", "Name", "Configuration"], COMPOSE),
        Block::PageBreak,
    ]
}

fn security() -> Vec<Block> {
    vec![
        Block::heading("5. Security Considerations", 1),
        Block::text("The SoundPlus++ application implements several security measures:"),
        Block::table(["Security Feature", "Implementation"], SECURITY),
        Block::PageBreak,
    ]
}

fn conclusion() -> Vec<Block> {
    // each highlight opens with a line break, as a bulleted run
    let highlights = HIGHLIGHTS.iter().map(|h| Span::new(format!("\n- {}", h)));

    vec![
        Block::heading("6. Conclusion", 1),
        Block::text(
            "The SoundPlus++ project implements a comprehensive CI/CD pipeline that ensures \
             reliable and efficient software delivery. The architecture combines local Jenkins \
             pipelines with cloud-based GitHub Actions to provide flexibility in deployment options.",
        ),
        Block::text("Key highlights of the automation approach include:"),
        Block::Paragraph(ParagraphBlock::new(highlights)),
        Block::empty(),
        Block::text(
            "This documentation provides a complete overview of the CI/CD design and automation \
             approach for the SoundPlus++ e-commerce platform, enabling consistent and repeatable \
             deployments across development, staging, and production environments.",
        ),
        Block::PageBreak,
    ]
}

fn appendix() -> Vec<Block> {
    vec![
        Block::heading("Appendix A: Quick Reference", 1),
        Block::heading("Access URLs", 2),
        Block::table(["Service", "URL", "Description"], ACCESS_URLS),
        Block::empty(),
        Block::heading("Docker Commands", 2),
        Block::table(["Command", "Description"], DOCKER_COMMANDS),
        Block::empty(),
        Block::heading("Repository Information", 2),
        Block::table(["Item", "Value"], REPOSITORY),
    ]
}

const EXPLANATIONS: &[(&str, &str)] = &[
    (
        "Git Tools - GitHub",
        "GitHub serves as the central version control system for the SoundPlus++ project. \
         The repository (https://github.com/Thiwankabanadara5400/Soundplus.git) hosts all source code, \
         Docker configurations, and CI/CD pipeline definitions. Developers push code changes to the \
         main branch, which triggers the automated CI/CD pipelines.",
    ),
    (
        "CI Tool - Jenkins",
        "Jenkins is configured as the local CI/CD orchestrator. When code is pushed to GitHub, \
         a webhook triggers the Jenkins pipeline defined in the Jenkinsfile. Jenkins performs \
         code checkout, environment setup, Docker image building, and service deployment. \
         The pipeline includes health checks to verify successful deployment.",
    ),
    (
        "Configuration Management - Environment Variables",
        "Environment configuration is managed through .env files for both frontend and backend services. \
         The Jenkins pipeline automatically creates these environment files during the Setup Environment stage, \
         ensuring consistent configuration across deployments.",
    ),
    (
        "Containerization - Docker",
        "Docker provides containerization for both frontend and backend applications. Each service \
         has its own Dockerfile that defines the build process using Node.js 18-slim as the base image. \
         Docker Compose orchestrates the multi-container deployment, managing networking between containers \
         and volume mounts for persistent data storage.",
    ),
    (
        "Container Connectivity",
        "The frontend and backend containers communicate over a Docker bridge network (soundplus-network). \
         The frontend container (port 3000) makes REST API calls to the backend container (port 5000) using axios. \
         The backend container connects to MongoDB Atlas for data persistence. All inter-service communication \
         is secured within the Docker network.",
    ),
];

const ACTIONS_TRIGGERS: &[&str] = &[
    "- Push events to main/master branches",
    "- Pull request events to main/master branches",
    "- Docker push and deploy jobs only run on main/master branch pushes",
];

const HIGHLIGHTS: &[&str] = &[
    "Fully containerized application using Docker and Docker Compose",
    "Dual CI/CD options: Jenkins (local) and GitHub Actions (cloud)",
    "Automated environment configuration and health checks",
    "Secure container networking with isolated communication",
    "Scalable architecture supporting multiple deployment targets",
    "Comprehensive monitoring through health check endpoints",
];

const CONTENTS: &[[&str; 2]] = &[
    ["1. Introduction", "3"],
    ["   1.1 Project Overview", "3"],
    ["   1.2 Technology Stack Summary", "3"],
    ["2. Part 1: CI/CD Design Diagram", "4"],
    ["   2.1 Architecture Overview Diagram", "4"],
    ["   2.2 CI/CD Pipeline Flow Diagram", "5"],
    ["   2.3 Container Architecture Diagram", "6"],
    ["   2.4 Component Connectivity Diagram", "7"],
    ["   2.5 Diagram Explanation", "8"],
    ["3. Part 2: Automation Approach", "10"],
    ["   3.1 DevOps Tools and Versions", "10"],
    ["   3.2 Application Tools and Dependencies", "11"],
    ["   3.3 Jenkins Pipeline Stages", "13"],
    ["   3.4 GitHub Actions Pipeline", "14"],
    ["   3.5 Deployment Automation Flow", "15"],
    ["4. Environment Configuration", "16"],
    ["5. Security Considerations", "17"],
    ["6. Conclusion", "18"],
];

const TECH_STACK: &[[&str; 3]] = &[
    ["Frontend Framework", "React", "18.3.1"],
    ["Build Tool", "Vite", "6.0.5"],
    ["Backend Framework", "Express.js", "4.21.2"],
    ["Runtime", "Node.js", "18.x (LTS)"],
    ["Database", "MongoDB Atlas", "Cloud"],
    ["Containerization", "Docker", "Latest"],
    ["Orchestration", "Docker Compose", "v2"],
    ["CI/CD (Local)", "Jenkins", "LTS"],
    ["CI/CD (Cloud)", "GitHub Actions", "Latest"],
    ["Version Control", "Git/GitHub", "Latest"],
];

const DEVOPS_TOOLS: &[[&str; 3]] = &[
    ["Git", "2.x", "Version control system for source code management and collaboration"],
    ["GitHub", "Cloud", "Remote repository hosting, pull requests, and code review"],
    ["GitHub Actions", "Latest", "Cloud-based CI/CD pipeline for automated builds and deployments"],
    [
        "Jenkins",
        "LTS (2.x)",
        "Local CI/CD server for build automation and deployment orchestration",
    ],
    ["Docker", "24.x", "Containerization platform for packaging applications with dependencies"],
    [
        "Docker Compose",
        "v2",
        "Multi-container orchestration tool for defining and running services",
    ],
    ["Docker Hub", "Cloud", "Container registry for storing and distributing Docker images"],
    ["Node.js", "18.x LTS", "JavaScript runtime for running frontend and backend applications"],
    ["npm", "9.x", "Package manager for installing and managing JavaScript dependencies"],
    ["AWS EC2", "Cloud", "Cloud virtual machine instances for production deployment (optional)"],
];

const FRONTEND_DEPS: &[[&str; 3]] = &[
    ["react", "18.3.1", "Core UI library for building component-based interfaces"],
    ["react-dom", "18.3.1", "React DOM rendering engine"],
    ["react-router-dom", "7.1.1", "Client-side routing for single-page application navigation"],
    ["axios", "1.11.0", "HTTP client for making REST API requests to backend"],
    ["react-icons", "5.5.0", "Icon library providing popular icon sets"],
    ["react-toastify", "11.0.5", "Toast notification library for user feedback"],
    ["swiper", "11.1.0", "Touch slider/carousel component for product displays"],
    ["vite", "6.0.5", "Fast build tool and development server"],
    ["@vitejs/plugin-react", "4.3.4", "Vite plugin for React support with Fast Refresh"],
    ["eslint", "9.17.0", "JavaScript linter for code quality enforcement"],
];

const BACKEND_DEPS: &[[&str; 3]] = &[
    ["express", "4.21.2", "Web framework for building REST API server"],
    ["mongoose", "8.0.0", "MongoDB ODM for database modeling and queries"],
    ["bcrypt", "5.1.1", "Password hashing library for secure authentication"],
    ["jsonwebtoken", "9.0.2", "JWT implementation for token-based authentication"],
    ["cors", "2.8.5", "Middleware for enabling Cross-Origin Resource Sharing"],
    ["body-parser", "1.20.3", "Middleware for parsing request bodies"],
    ["cookie-parser", "1.4.7", "Middleware for parsing cookies"],
    ["multer", "1.4.5-lts.1", "Middleware for handling file uploads"],
    ["dotenv", "16.4.7", "Environment variable management"],
    ["nodemon", "3.1.9", "Development tool for auto-reloading on file changes"],
];

const DATABASE: &[[&str; 3]] = &[
    ["MongoDB Atlas", "Cloud", "Cloud-hosted MongoDB database service"],
    ["Database Name", "Sound_lk", "Main application database"],
    ["Connection", "MongoDB Driver", "mongoose ODM for Node.js"],
];

const COLLECTIONS: &[[&str; 3]] = &[
    ["users", "username, email, password, role, createdAt", "User authentication and profiles"],
    ["products", "name, price, category, brand, features, etc.", "Product catalog information"],
    ["carts", "userId, productId, quantity", "Shopping cart items"],
    ["orders", "userId, items, totalAmount, status, shippingAddress", "Order records"],
];

const JENKINS_STAGES: &[[&str; 3]] = &[
    ["1", "Checkout", "Clones the source code from GitHub repository (main branch)"],
    [
        "2",
        "Pre-flight Check",
        "Validates Docker and Docker Compose versions, cleans up existing containers",
    ],
    ["3", "Setup Environment", "Creates .env files with required configuration variables"],
    [
        "4",
        "Build Images",
        "Builds Docker images for frontend and backend using docker-compose build",
    ],
    ["5", "Start Services", "Launches containers using docker-compose up in detached mode"],
    ["6", "Verify Services", "Performs health checks on backend /health endpoint"],
    ["7", "Success", "Displays deployment information and access URLs"],
];

const JENKINS_CONFIG: &[[&str; 3]] = &[
    ["COMPOSE_PROJECT_NAME", "soundplus", "Docker Compose project identifier"],
    ["PROJECT_NAME", "SoundPlus++", "Display name for the project"],
    ["SCM Repository", "GitHub", "https://github.com/Thiwankabanadara5400/Soundplus.git"],
    ["Branch", "main", "Default branch for deployment"],
];

const ACTIONS_JOBS: &[[&str; 3]] = &[
    ["backend-build", "Build", "Builds backend with Node.js 18, installs dependencies"],
    ["frontend-build", "Build", "Builds frontend with Node.js 18, installs dependencies"],
    ["docker-push", "Push", "Builds and pushes Docker images to Docker Hub registry"],
    ["deploy", "Deploy", "Deploys to AWS EC2 instance via SSH"],
];

const ACTIONS_SECRETS: &[[&str; 2]] = &[
    ["DOCKER_USERNAME", "Docker Hub authentication username"],
    ["DOCKER_PASSWORD", "Docker Hub authentication password/token"],
    ["AWS_ACCESS_KEY_ID", "AWS IAM access key for EC2 deployment"],
    ["AWS_SECRET_ACCESS_KEY", "AWS IAM secret key for EC2 deployment"],
    ["AWS_REGION", "AWS region for EC2 instance"],
    ["EC2_SSH_PRIVATE_KEY", "SSH private key for EC2 access"],
    ["EC2_HOST", "EC2 instance hostname or IP address"],
    ["EC2_USER", "SSH username for EC2 instance"],
];

const DEPLOY_FLOW: &[[&str; 2]] = &[
    ["1", "Developer pushes code changes to GitHub repository"],
    ["2", "GitHub webhook triggers Jenkins pipeline OR GitHub Actions workflow"],
    ["3", "Pipeline clones repository and validates environment"],
    ["4", "Environment variables are configured from templates"],
    ["5", "Docker images are built for frontend and backend"],
    ["6", "Images are tagged and pushed to Docker Hub registry"],
    ["7", "Docker Compose starts containers on target environment"],
    ["8", "Health checks verify service availability"],
    ["9", "Deployment status is reported (success/failure)"],
    ["10", "Application is accessible at configured ports"],
];

const SCRIPTS: &[[&str; 2]] = &[
    ["docker-rebuild.sh", "Complete Docker rebuild with cache cleanup"],
    ["docker-push.sh", "Push images to Docker Hub with proper tagging"],
    ["docker-check.sh", "Health check validation for running services"],
    ["scripts/setup-jenkins.sh", "Automated Jenkins server configuration"],
];

const BACKEND_ENV: &[[&str; 3]] = &[
    ["PORT", "5000", "Backend server port"],
    ["NODE_ENV", "development/production", "Runtime environment mode"],
    ["MONGODB_URI", "mongodb+srv://...", "MongoDB Atlas connection string"],
    ["DB_NAME", "Sound_lk", "Database name"],
    ["JWT_SECRET", "soundplus_secret_key_2025", "Secret for JWT token signing"],
    ["CORS_ORIGIN", "http://localhost:3000", "Allowed CORS origin"],
];

const FRONTEND_ENV: &[[&str; 3]] = &[
    ["VITE_API_URL", "http://localhost:5000", "Backend API base URL"],
];

const COMPOSE: &[[&str; 3]] = &[
    ["Frontend Container", "soundplus-frontend", "Port 3000"],
    ["Backend Container", "soundplus-backend", "Port 5000"],
    ["Network", "soundplus-network", "Bridge driver"],
    ["Volume", "backend-uploads", "Product image storage"],
];

const SECURITY: &[[&str; 2]] = &[
    ["Authentication", "JWT tokens with 7-day expiration, stored in httpOnly cookies"],
    ["Password Security", "bcrypt hashing with 10 salt rounds"],
    ["Access Control", "Role-based access (user/admin) for protected routes"],
    ["CORS", "Restricted to configured origins only"],
    ["File Uploads", "10MB limit, image format validation (jpeg, png, gif, webp)"],
    ["Environment", "Sensitive data stored in .env files, not in code"],
    ["Network", "Docker bridge network isolates container communication"],
];

const ACCESS_URLS: &[[&str; 3]] = &[
    ["Frontend", "http://localhost:3000", "User interface"],
    ["Backend API", "http://localhost:5000", "REST API endpoints"],
    ["Health Check", "http://localhost:5000/health", "Backend health status"],
];

const DOCKER_COMMANDS: &[[&str; 2]] = &[
    ["docker-compose up --build", "Build and start all services"],
    ["docker-compose down", "Stop and remove all containers"],
    ["docker-compose logs -f", "View real-time logs"],
    ["docker-compose ps", "List running containers"],
];

const REPOSITORY: &[[&str; 2]] = &[
    ["GitHub URL", "https://github.com/Thiwankabanadara5400/Soundplus.git"],
    ["Default Branch", "main"],
    ["License", "ISC"],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BlockSummary;

    #[test]
    fn test_starts_with_title_page() {
        let plan = plan();
        assert_eq!(plan[0], Block::title("SoundPlus++ Project"));
        assert_eq!(plan[3], Block::PageBreak);
        assert_eq!(plan[4], Block::heading("Table of Contents", 1));
    }

    #[test]
    fn test_every_table_is_rectangular() {
        let plan = plan();
        let tables: Vec<_> = plan
            .iter()
            .filter_map(|b| match b {
                Block::Table { headers, rows } => Some((headers, rows)),
                _ => None,
            })
            .collect();

        assert_eq!(tables.len(), 19);
        for (headers, rows) in tables {
            assert!(rows.iter().all(|r| r.len() == headers.len()), "{:?}", headers);
        }
    }

    #[test]
    fn test_section_headings_in_order() {
        let top: Vec<_> = plan()
            .iter()
            .filter_map(|b| match b.summary() {
                BlockSummary::Heading { level: 1, text } => Some(text),
                _ => None,
            })
            .collect();

        assert_eq!(
            top,
            vec![
                "Table of Contents",
                "1. Introduction",
                "2. Part 1: CI/CD Design Diagram",
                "3. Part 2: Automation Approach",
                "4. Environment Configuration",
                "5. Security Considerations",
                "6. Conclusion",
                "Appendix A: Quick Reference",
            ]
        );
    }

    #[test]
    fn test_diagrams_present() {
        let plan = plan();
        for diagram in [
            diagrams::ARCHITECTURE,
            diagrams::PIPELINE_FLOW,
            diagrams::CONTAINERS,
            diagrams::CONNECTIVITY,
        ] {
            assert!(plan.contains(&Block::diagram(diagram)));
            assert!(diagram.starts_with('\n') && diagram.ends_with('\n'));
        }
    }

    #[test]
    fn test_contents_entries_use_tab_stop() {
        let entries = plan()
            .iter()
            .filter(|b| matches!(b, Block::Paragraph(p) if p.tab_stop.is_some()))
            .count();
        assert_eq!(entries, CONTENTS.len());
    }
}
