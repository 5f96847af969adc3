//! Portfolio manifest
//!
//! The compiled-in tree served by the shell: work history under `/jobs`,
//! side projects under `/projects` and schooling under `/academics`.

use super::types::VfsError;
use super::vfs::Vfs;

const LOCKHEED_TXT: &str = "LOCKHEED MARTIN - Software Engineering Intern
Location: Moorestown, NJ
Duration: May 2025 - August 2025

Key Accomplishments:
• Enhanced existing lab debug tool to support semi-automated issue reporting
• Increased consistency and detail of problem reports, reducing time spent per defect
• Resolved various bugs and implemented changes for project compliance
• Worked primarily in Java programming language
• Led a team of 3 interns to develop hypersonic threat assessment system
• Used Python and Matlab for threat assessment system development
• Gained experience in defense/aerospace industry software development";

const BAYER_TXT: &str = "BAYER RADIOLOGY - Software Developer Co-op
Location: Pittsburgh, PA
Duration: May 2024 - November 2024

Key Accomplishments:
• Implemented real-time motor position verification in embedded contrast injection system
• Enhanced patient safety through precise control during injection procedures
• Created and executed embedded C++ and C unit tests for next-generation contrast injector
• Ensured software accuracy, consistency, and patient safety through comprehensive testing
• Designed and developed automated build system for hardened product images
• Significantly reduced build time while improving consistency
• Prioritized modularity for future process changes and deployment efficiency";

const TWO_ROADS_TXT: &str = "TWO ROADS BREWING - Logistics Team Intern
Location: Stratford, CT
Duration: May 2023 - August 2023

Key Accomplishments:
• Utilized the SAP suite to conduct loss analysis and track production metrics
• Executed inventory corrections to maintain accurate stock levels
• Investigated and analyzed inventory discrepancies to identify inefficiencies
• Improved forecasting accuracy through systematic analysis
• Oversaw contract customer order fulfillment operations
• Ensured trucks were loading in a timely and accurate manner
• Gained experience in supply chain management and logistics operations";

const RUST_DISTRIBUTED_TXT: &str = "RUST DISTRIBUTED FILE SHARING
Date: April 2025
Languages: Rust

Project Overview:
• Developed a distributed and scalable file distribution system written in Rust
• Implemented multiple clients and linking servers architecture
• Focused on synchronization and memory safe programming practices
• Designed and implemented custom network protocols
• Emphasized distributed systems principles and concurrent programming
• Demonstrated expertise in systems programming with Rust";

const HOMELAB_TXT: &str = "PERSONAL HOMELAB
Date: September 2019 - Current
Technologies: Linux, Virtualization, Docker, WireGuard, Backup Systems

Project Overview:
• Designed and implemented personal homelab on Linux-based system
• Leveraged virtualization, Docker containerization, and WireGuard VPN
• Integrated various backup and cloud storage utilities
• Maintained and continuously optimized infrastructure for over 7 years
• Migrated across various platforms while increasing reliability
• Focused on efficiency, performance optimization, and system administration
• Demonstrates long-term commitment to infrastructure management";

const PHONE_BOOTH_TXT: &str = "DIGITAL PHONE BOOTH
Date: August 2022
Languages: C#
Competition: SkillUSA National Level

Project Overview:
• Collaborated with multidisciplinary team of 3 to construct digitized phone booth
• Competed in SkillUSA at the national level
• Retrofitted authentic rotary phone to function as USB keypad
• Developed front-end application written in C#
• Implemented hardware-software integration for vintage phone interface
• Won Connecticut state competition
• Showcased project at national level in Atlanta, Georgia
• Demonstrated teamwork, hardware integration, and competitive programming skills";

const EDUCATION_TXT: &str = "EDUCATION

Rochester Institute of Technology - Rochester, NY
Bachelor of Science in Software Engineering
Expected Graduation: May 2026

Academic Performance:
• Cumulative GPA: 3.96/4.0
• Dean's List: 2022 - Present
• Outstanding Undergraduate Scholar (April 2025) - Top 1% of undergraduate class

Relevant Coursework:
• Analysis of Algorithms
• Engineering of Software Subsystems
• Web Engineering
• Software Project Management

Honors and Organizations:
• Tau Beta Pi (May 2025 - Present) - New York Pi Chapter
• Focus on integrity, service, and advancement of engineering

Leadership Experience:
• Resident Advisor (August 2023 - Present)
• Overseeing 33 students, shaping campus culture
• Fostering academic success and managing conflict resolution";

/// Folder name and its files, in listing order.
const MANIFEST: &[(&str, &[(&str, &str)])] = &[
    ("jobs", &[
        ("lockheed.txt", LOCKHEED_TXT),
        ("bayer.txt", BAYER_TXT),
        ("two_roads.txt", TWO_ROADS_TXT),
    ]),
    ("projects", &[
        ("rust_distributed_file_sharing.txt", RUST_DISTRIBUTED_TXT),
        ("personal_homelab.txt", HOMELAB_TXT),
        ("digital_phone_booth.txt", PHONE_BOOTH_TXT),
    ]),
    ("academics", &[
        ("education.txt", EDUCATION_TXT),
    ]),
];

/// Build the portfolio tree. Hosts call this once and share the result.
pub fn build_portfolio() -> Result<Vfs, VfsError> {
    let mut fs = Vfs::new();
    for (folder_name, files) in MANIFEST {
        let folder = fs.create_folder(folder_name)?;
        for (file_name, content) in files.iter() {
            fs.add_file(folder, file_name, content)?;
        }
        fs.add_child(Vfs::ROOT, folder)?;
    }
    Ok(fs)
}
