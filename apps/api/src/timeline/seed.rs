//! Built-in timeline loaded at start-up. Most recent chapter first.

use crate::models::{JourneyEntry, Profile, Theme};

pub fn seed_profile() -> Profile {
    Profile {
        name: "Gagandeep Dhaliwal".to_string(),
        headline: "Bridging the gap between Finance & IT".to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn seed_entry(
    id: &str,
    role: &str,
    company: &str,
    location: &str,
    title: &str,
    description: &str,
    date_range: &str,
    emoji: &str,
    website_url: &str,
) -> JourneyEntry {
    JourneyEntry {
        id: id.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date_range: date_range.to_string(),
        emoji: emoji.to_string(),
        website_url: Some(website_url.to_string()),
        tags: Vec::new(),
        skills: Vec::new(),
        tools: Vec::new(),
        duties: Vec::new(),
        theme: None,
        image_url: None,
        ai_generated: false,
    }
}

pub fn seed_entries() -> Vec<JourneyEntry> {
    vec![
        JourneyEntry {
            tags: strings(&["Higher Education", "Process Improvement", "Public Sector"]),
            skills: strings(&[
                "Banner ERP",
                "Workflow Automation",
                "Spending Authority Compliance",
                "FAST Finance",
                "Vendor Reconciliation",
                "GAAP Compliance",
            ]),
            tools: strings(&[
                "Banner 9",
                "Chrome River",
                "MS Access",
                "Convera",
                "TDX",
                "Excel",
                "FAST Finance",
            ]),
            duties: strings(&[
                "I manage full-cycle accounts payable, processing high-volume invoices and reconciling vendor statements.",
                "I validate spending authority signatures and digital certificates (UFV-AD-CA) against budget codes.",
                "I spearheaded the \"Digital Workflow\" initiative, eliminating paper trails by implementing shared digital structures.",
                "I process complex payments including EFTs, Cheques, and Convera foreign currency wires.",
                "I collaborate with IT and Finance to implement process improvements and train end-users on AP policies.",
            ]),
            theme: Some(Theme::new("#00573D", "#4D8270", "#F0F7F4", "#003B29")),
            ..seed_entry(
                "1",
                "Officer, Accounts Payable",
                "University of the Fraser Valley",
                "Abbotsford, BC",
                "Coming Full Circle",
                "**Walking Back Into UFV, But This Time as a Professional**\n\
                 This is the same campus where I first studied when I arrived in Canada. \
                 Applying internally for the Accounts Payable Officer role felt like coming home as the person I had grown into.\n\n\
                 **What I Actually Do Daily**\n\
                 I validate spending authority, correct invoices missing backup or coding, manage vendor creation through TDX, \
                 enter complex GST/PST and FX allocations into Banner 9, and execute EFT, cheque and Convera wire payment runs.\n\n\
                 **The Idea That Changed Everything**\n\
                 Everything was paper-based, so I proposed a shared digital folder structure, naming conventions and attaching PDFs \
                 directly in Banner, and offered to write the SOP and train the team. The proposal was well received.",
                "May 2025 - Present",
                "🎓",
                "https://www.ufv.ca/",
            )
        },
        JourneyEntry {
            tags: strings(&["Agri-Business", "System Implementation", "Multi-Entity Accounting"]),
            skills: strings(&[
                "Papersave Cloud",
                "Dynamics GP",
                "Payroll Analysis",
                "SQL Templates",
                "Multi-Currency Recon",
                "Inventory Accounting",
            ]),
            tools: strings(&[
                "Microsoft Dynamics GP",
                "Papersave (Cloud/On-Prem)",
                "SQL",
                "Excel (Pivot/VLOOKUP)",
                "TimeClock Plus",
                "Convera",
            ]),
            duties: strings(&[
                "I acted as the bridge between Finance and IT, leading the migration to Papersave Cloud and redesigning SQL-based invoice templates.",
                "I managed full-cycle payment runs for 8+ distinct entities, handling complex inter-company entries and foreign currency wires.",
                "I developed payroll analysis dashboards to track overtime and labor inefficiencies, preparing to succeed the Payroll Manager.",
            ]),
            theme: Some(Theme::new("#5D4037", "#C0CA33", "#EFEBE9", "#3E2723")),
            ..seed_entry(
                "2",
                "Accounts Payable Specialist & Systems Lead",
                "Friesen Group of Companies",
                "Abbotsford, BC",
                "The Transformational Chapter",
                "**Walking Into a World of Paper, Processes, and Possibilities**\n\
                 I joined a heavily paper-based AP department spanning more than eight companies, each with its own bank accounts, \
                 GP entity and GL structure. Within months I was modernising AP, supporting AR and redesigning GP invoice templates.\n\n\
                 **Becoming the Bridge Between Finance & IT**\n\
                 I mapped current-to-future processes for the Papersave Cloud implementation and represented finance in technical \
                 meetings. When the Assistant Controller resigned I covered receiving, PO matching and accruals, then trained the new hire.\n\n\
                 **Stepping Into Payroll**\n\
                 I was chosen as successor to the retiring Payroll Manager and built cost reports that exposed labour inefficiencies.",
                "Previous Chapter",
                "🌾",
                "https://friesencompanies.com/",
            )
        },
        JourneyEntry {
            tags: strings(&["Logistics", "Accounts Receivable", "Operations"]),
            skills: strings(&[
                "TMW TruckMate",
                "Dynamics GP",
                "Driver Payroll",
                "Multi-Entity Banking",
                "Credit Card Recon",
                "Cash Applications",
            ]),
            tools: strings(&[
                "TMW Suite",
                "Dynamics GP",
                "PeopleNet",
                "Excel",
                "Online Banking Portals",
                "Customer Portals",
            ]),
            duties: strings(&[
                "I managed full-cycle Accounts Receivable, reducing aging significantly by clearing backlogs and managing collections for major clients.",
                "I acted as the operational hub for driver timesheets, validating highway/city hours against PeopleNet data for accurate payroll.",
                "I mastered the integration between TMW TruckMate and Dynamics GP to ensure accurate financial posting and job costing.",
            ]),
            theme: Some(Theme::new("#D32F2F", "#212121", "#FAFAFA", "#B71C1C")),
            ..seed_entry(
                "3",
                "Senior AR & Operations Lead",
                "Triple Eight Transport Inc.",
                "Abbotsford, BC",
                "The Logistics & Operations Journey",
                "**Where Finance Meets the Highway**\n\
                 Trucking taught me that every number has a driver, a load and a customer behind it. I owned receivables, \
                 chased aged balances and kept cash applications current across several entities.\n\n\
                 **The Operational Hub**\n\
                 I reconciled driver timesheets against PeopleNet logs and learned how TruckMate postings flow into Dynamics GP.",
                "Previous Chapter",
                "🚛",
                "https://triple8.ca/",
            )
        },
        JourneyEntry {
            tags: strings(&["Engineering Consulting", "Office Admin", "Accounting Foundations"]),
            skills: strings(&[
                "QuickBooks",
                "Proposal Writing",
                "AR/AP Cycle",
                "Payroll Coordination",
                "Project Management",
                "Client Communication",
            ]),
            tools: strings(&["QuickBooks", "Excel", "Social Media Tools", "Outlook", "Word"]),
            duties: strings(&[
                "I managed the full office lifecycle, from greeting clients and drafting engineering proposals to handling courier logistics.",
                "I transitioned into a dedicated accounting role, managing full-cycle AP/AR and implementing QuickBooks to replace manual spreadsheets.",
                "I acted as the bridge between employees and payroll, coordinating timesheets and project logs for accurate processing.",
            ]),
            theme: Some(Theme::new("#00838F", "#B2EBF2", "#E0F7FA", "#006064")),
            ..seed_entry(
                "4",
                "Office Administrator & Accounting Assistant",
                "EPro Consultants Ltd.",
                "Surrey, BC",
                "The Foundation: My First Real Office Chapter",
                "**My First Real Office**\n\
                 I started at the front desk of an engineering consultancy, drafting proposals and keeping the office running. \
                 Curiosity about the numbers pulled me into accounting, where I replaced manual spreadsheets with QuickBooks.",
                "Early Career",
                "📐",
                "https://eproconsultants.ca/",
            )
        },
        JourneyEntry {
            tags: strings(&["Operations Management", "Team Leadership", "Customer Service"]),
            skills: strings(&[
                "Shift Management",
                "Conflict Resolution",
                "Staff Training",
                "Inventory Control",
                "Cash Management",
            ]),
            tools: strings(&[
                "POS Systems",
                "Scheduling Software",
                "Cash Handling",
                "Safety Protocols",
            ]),
            duties: strings(&[
                "I progressed from Crew Member to Shift Manager, leading teams during peak hours and ensuring operational efficiency.",
                "I trained new employees on POS systems and safety standards, building a cohesive and high-performing team.",
                "I was recognized as Employee of the Year for exceptional speed, reliability, and leadership under pressure.",
            ]),
            theme: Some(Theme::new("#DA291C", "#FFC72C", "#FFF8E1", "#B71C1C")),
            ..seed_entry(
                "5",
                "Shift Manager & Employee of the Year",
                "McDonald's Canada",
                "Abbotsford, BC",
                "The Foundation: Leadership & Resilience",
                "**Leadership Under Pressure**\n\
                 Peak-hour rushes taught me calm, speed and how to lead a team. I grew from crew member to shift manager \
                 and was named Employee of the Year.",
                "Early Foundation",
                "🍔",
                "https://www.mcdonalds.com/ca/en-ca.html",
            )
        },
        JourneyEntry {
            tags: strings(&["Computer Systems", "Software Development", "System Analysis"]),
            skills: strings(&[
                "Java & C++",
                "SQL & Database Design",
                "Network Administration",
                "Systems Analysis",
                "Web Development",
                "Technical Troubleshooting",
            ]),
            tools: strings(&[
                "Python",
                "Linux",
                "HTML/CSS",
                "UML Diagrams",
                "Entity Relationship Diagrams (ERD)",
                "Visio",
            ]),
            duties: strings(&[
                "I mastered core programming logic in Python, Java, and C++, building the foundation for my future technical problem-solving skills.",
                "I learned Database Management and SQL, which became the critical skill allowing me to optimize ERP systems in my finance career.",
                "I studied Systems Analysis and Design, learning to map workflows and identify inefficiencies, a skill I applied to every job thereafter.",
            ]),
            theme: Some(Theme::new("#00573D", "#F2A900", "#F0F7F4", "#003B29")),
            ..seed_entry(
                "6",
                "Diploma in Computer Information Systems",
                "University of the Fraser Valley",
                "Abbotsford, BC",
                "The Academic Foundation",
                "**Starting From Zero**\n\
                 I arrived in Canada alone and enrolled at UFV. Programming, databases and systems analysis gave me \
                 the technical lens I later brought to every finance role.",
                "Class of 2020",
                "🎓",
                "https://www.ufv.ca/",
            )
        },
    ]
}
