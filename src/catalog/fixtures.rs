//! Seed listings for each regional board.
//!
//! Posting dates are stored as whole days before "now" and resolved when the
//! catalog is seeded, so the board always looks freshly populated.

use crate::domain::format::days_before;
use crate::domain::job::{JobListing, JobType, VacancyStatus};
use crate::domain::region::Region;

pub(crate) struct Fixture {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub state: &'static str,
    pub district: &'static str,
    pub job_type: JobType,
    pub salary_min: u64,
    pub salary_max: u64,
    pub days_ago: i64,
    pub status: Option<VacancyStatus>,
    pub description: &'static str,
}

impl Fixture {
    fn to_listing(&self, region: Region, now_nanos: i64) -> JobListing {
        JobListing {
            job_id: self.id.to_string(),
            title: self.title.to_string(),
            company: self.company.to_string(),
            description: self.description.to_string(),
            country: None,
            state: self.state.to_string(),
            city: None,
            district: self.district.to_string(),
            job_type: self.job_type,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            salary_currency: region.currency().to_string(),
            date_posted: days_before(now_nanos, self.days_ago),
            status: self.status,
        }
    }
}

/// Materializes the fixture set for `region`, posting dates relative to `now_nanos`.
pub(crate) fn seed(region: Region, now_nanos: i64) -> Vec<JobListing> {
    let fixtures = match region {
        Region::Malaysia => MALAYSIA,
        Region::India => INDIA,
    };
    fixtures
        .iter()
        .map(|fixture| fixture.to_listing(region, now_nanos))
        .collect()
}

use crate::domain::job::JobType::{Contract, FullTime, PartTime, Remote};
use crate::domain::job::VacancyStatus::{Draft, Old};

const MALAYSIA: &[Fixture] = &[
    Fixture {
        id: "job-1", title: "Senior Software Engineer", company: "Axiata Digital",
        state: "Kuala Lumpur", district: "Bukit Bintang", job_type: FullTime,
        salary_min: 8000, salary_max: 14000, days_ago: 2, status: None,
        description: "Design and run scalable backend services and APIs for a regional digital telco group.",
    },
    Fixture {
        id: "job-2", title: "Full Stack Developer", company: "CIMB Bank Berhad",
        state: "Kuala Lumpur", district: "Damansara", job_type: FullTime,
        salary_min: 6000, salary_max: 10000, days_ago: 4, status: None,
        description: "Ship internal banking tools and customer-facing fintech features with React and Spring Boot.",
    },
    Fixture {
        id: "job-3", title: "Product Designer (UI/UX)", company: "Grab Malaysia",
        state: "Selangor", district: "Petaling Jaya", job_type: FullTime,
        salary_min: 7000, salary_max: 11000, days_ago: 1, status: None,
        description: "Own end-to-end design for rider and merchant journeys, from research to polished prototypes.",
    },
    Fixture {
        id: "job-4", title: "Registered Nurse (ICU)", company: "Pantai Hospital",
        state: "Selangor", district: "Klang", job_type: FullTime,
        salary_min: 4000, salary_max: 6500, days_ago: 3, status: None,
        description: "Provide critical care nursing in a 24-bed intensive care unit. Valid MNC registration required.",
    },
    Fixture {
        id: "job-5", title: "Data Analyst", company: "Maybank",
        state: "Kuala Lumpur", district: "KLCC", job_type: FullTime,
        salary_min: 5500, salary_max: 8500, days_ago: 6, status: None,
        description: "Turn retail banking data into dashboards and insights for product and risk teams.",
    },
    Fixture {
        id: "job-6", title: "Frontend Developer (React)", company: "Shopee Malaysia",
        state: "Penang", district: "Georgetown", job_type: Remote,
        salary_min: 5000, salary_max: 9000, days_ago: 7, status: None,
        description: "Build fast, accessible storefront features used by millions of shoppers every day.",
    },
    Fixture {
        id: "job-7", title: "Civil Engineer", company: "Gamuda Berhad",
        state: "Selangor", district: "Shah Alam", job_type: FullTime,
        salary_min: 5000, salary_max: 8000, days_ago: 5, status: None,
        description: "Supervise infrastructure works on major rail and highway packages. BEM registration preferred.",
    },
    Fixture {
        id: "job-8", title: "Primary School Teacher (Science)", company: "SK Convent Johor Bahru",
        state: "Johor", district: "Johor Bahru", job_type: FullTime,
        salary_min: 3200, salary_max: 5000, days_ago: 10, status: None,
        description: "Teach science to upper primary classes and lead the school's STEM club activities.",
    },
    Fixture {
        id: "job-9", title: "Marketing Manager", company: "AirAsia",
        state: "Selangor", district: "Sepang", job_type: FullTime,
        salary_min: 8000, salary_max: 13000, days_ago: 3, status: None,
        description: "Lead route launch campaigns and brand partnerships across ASEAN markets.",
    },
    Fixture {
        id: "job-10", title: "Pharmacist", company: "Guardian Health & Beauty",
        state: "Penang", district: "Bayan Lepas", job_type: PartTime,
        salary_min: 2800, salary_max: 4200, days_ago: 8, status: None,
        description: "Dispense medication and counsel customers at a busy retail outlet. Flexible weekend shifts.",
    },
    Fixture {
        id: "job-11", title: "Cloud Solutions Architect", company: "Telekom Malaysia",
        state: "Kuala Lumpur", district: "Bangsar", job_type: FullTime,
        salary_min: 12000, salary_max: 18000, days_ago: 1, status: None,
        description: "Architect hybrid cloud platforms for enterprise and government clients.",
    },
    Fixture {
        id: "job-12", title: "Accounts Executive", company: "PricewaterhouseCoopers Malaysia",
        state: "Johor", district: "Iskandar Puteri", job_type: Contract,
        salary_min: 4000, salary_max: 6000, days_ago: 9, status: None,
        description: "Handle full-set accounts and month-end closing for a portfolio of SME clients.",
    },
    Fixture {
        id: "job-13", title: "Software Engineer (Mobile)", company: "Fusionex International",
        state: "Sabah", district: "Kota Kinabalu", job_type: Remote,
        salary_min: 5500, salary_max: 8500, days_ago: 2, status: None,
        description: "Develop cross-platform mobile apps for analytics products. Flutter or React Native experience.",
    },
    Fixture {
        id: "job-14", title: "Operations Manager", company: "Top Glove Corporation",
        state: "Perak", district: "Ipoh", job_type: FullTime,
        salary_min: 9000, salary_max: 14000, days_ago: 12, status: None,
        description: "Run daily plant operations, safety programmes, and continuous improvement initiatives.",
    },
    Fixture {
        id: "job-15", title: "Graphic Designer", company: "Star Media Group",
        state: "Selangor", district: "Petaling Jaya", job_type: PartTime,
        salary_min: 2500, salary_max: 4000, days_ago: 6, status: None,
        description: "Produce print and social layouts for news and lifestyle titles on tight deadlines.",
    },
    Fixture {
        id: "job-16", title: "Quantity Surveyor", company: "IJM Corporation",
        state: "Sarawak", district: "Kuching", job_type: Contract,
        salary_min: 5000, salary_max: 7500, days_ago: 14, status: None,
        description: "Prepare cost estimates, tender documents, and final accounts for building projects.",
    },
    Fixture {
        id: "job-17", title: "Digital Marketing Specialist", company: "Lazada Malaysia",
        state: "Kuala Lumpur", district: "Chow Kit", job_type: Remote,
        salary_min: 4500, salary_max: 7000, days_ago: 4, status: None,
        description: "Plan and optimise paid search and social campaigns for mega sale events.",
    },
    Fixture {
        id: "job-18", title: "HR Business Partner", company: "Petronas",
        state: "Kedah", district: "Alor Setar", job_type: FullTime,
        salary_min: 7000, salary_max: 11000, days_ago: 7, status: None,
        description: "Partner with plant leadership on workforce planning, talent, and employee relations.",
    },
    Fixture {
        id: "job-19", title: "Biomedical Engineer", company: "Hospital Tengku Ampuan Afzan",
        state: "Pahang", district: "Kuantan", job_type: FullTime,
        salary_min: 4500, salary_max: 7000, days_ago: 11, status: None,
        description: "Maintain and calibrate clinical equipment across wards and operating theatres.",
    },
    Fixture {
        id: "job-20", title: "Finance Manager", company: "Sunway Group",
        state: "Negeri Sembilan", district: "Seremban", job_type: FullTime,
        salary_min: 10000, salary_max: 16000, days_ago: 5, status: None,
        description: "Lead budgeting, forecasting, and statutory reporting for the Seremban division.",
    },
    Fixture {
        id: "job-21", title: "Network Engineer", company: "Celcom Axiata",
        state: "Selangor", district: "Shah Alam", job_type: FullTime,
        salary_min: 5000, salary_max: 8000, days_ago: 48, status: Some(Old),
        description: "Operate and troubleshoot the core IP network. Position has been filled.",
    },
    Fixture {
        id: "job-22", title: "Sous Chef", company: "Shangri-La Rasa Sayang",
        state: "Penang", district: "Batu Ferringhi", job_type: FullTime,
        salary_min: 4000, salary_max: 6000, days_ago: 1, status: Some(Draft),
        description: "Run the hot kitchen for the resort's all-day dining outlet.",
    },
];

const INDIA: &[Fixture] = &[
    Fixture {
        id: "job-1", title: "Backend Developer (Java)", company: "Zoho Corporation",
        state: "Tamil Nadu", district: "Chennai", job_type: FullTime,
        salary_min: 600_000, salary_max: 1_200_000, days_ago: 1, status: None,
        description: "Build high-throughput services for a suite of business SaaS products.",
    },
    Fixture {
        id: "job-2", title: "Data Engineer", company: "Swiggy",
        state: "Karnataka", district: "Bengaluru", job_type: FullTime,
        salary_min: 1_500_000, salary_max: 2_400_000, days_ago: 3, status: None,
        description: "Own streaming pipelines that power delivery-time predictions and partner payouts.",
    },
    Fixture {
        id: "job-3", title: "UX Researcher", company: "Zomato",
        state: "Haryana", district: "Gurugram", job_type: FullTime,
        salary_min: 900_000, salary_max: 1_400_000, days_ago: 2, status: None,
        description: "Plan and run qualitative studies with diners and restaurant partners.",
    },
    Fixture {
        id: "job-4", title: "Staff Nurse", company: "Apollo Hospitals",
        state: "Telangana", district: "Hyderabad", job_type: FullTime,
        salary_min: 360_000, salary_max: 540_000, days_ago: 5, status: None,
        description: "Deliver patient care on medical-surgical wards. GNM or B.Sc Nursing required.",
    },
    Fixture {
        id: "job-5", title: "Chartered Accountant", company: "Deloitte India",
        state: "Maharashtra", district: "Mumbai", job_type: FullTime,
        salary_min: 1_000_000, salary_max: 1_600_000, days_ago: 4, status: None,
        description: "Lead statutory audits for listed clients in manufacturing and retail.",
    },
    Fixture {
        id: "job-6", title: "Mobile Developer (Flutter)", company: "Paytm",
        state: "Uttar Pradesh", district: "Noida", job_type: Remote,
        salary_min: 800_000, salary_max: 1_500_000, days_ago: 6, status: None,
        description: "Ship payment and wallet features to a very large Android and iOS user base.",
    },
    Fixture {
        id: "job-7", title: "Content Writer", company: "Freshworks",
        state: "Tamil Nadu", district: "Chennai", job_type: PartTime,
        salary_min: 25_000, salary_max: 40_000, days_ago: 7, status: None,
        description: "Write product guides and blog posts for customer support software.",
    },
    Fixture {
        id: "job-8", title: "Mechanical Engineer", company: "Tata Motors",
        state: "Gujarat", district: "Sanand", job_type: FullTime,
        salary_min: 500_000, salary_max: 850_000, days_ago: 9, status: None,
        description: "Improve assembly line tooling and quality for passenger vehicle production.",
    },
    Fixture {
        id: "job-9", title: "Operations Analyst", company: "ITC Limited",
        state: "West Bengal", district: "Kolkata", job_type: Contract,
        salary_min: 450_000, salary_max: 700_000, days_ago: 11, status: None,
        description: "Track supply chain KPIs and support distribution planning for FMCG brands.",
    },
    Fixture {
        id: "job-10", title: "Cybersecurity Analyst", company: "HCLTech",
        state: "Uttar Pradesh", district: "Lucknow", job_type: FullTime,
        salary_min: 700_000, salary_max: 1_300_000, days_ago: 8, status: None,
        description: "Monitor SOC alerts, run incident response, and harden client environments.",
    },
    Fixture {
        id: "job-11", title: "Hotel Operations Manager", company: "Taj Hotels",
        state: "Kerala", district: "Kochi", job_type: FullTime,
        salary_min: 900_000, salary_max: 1_500_000, days_ago: 13, status: None,
        description: "Oversee front office, housekeeping, and guest experience at a heritage property.",
    },
    Fixture {
        id: "job-12", title: "Software Engineer", company: "TCS",
        state: "Karnataka", district: "Bengaluru", job_type: FullTime,
        salary_min: 400_000, salary_max: 800_000, days_ago: 45, status: Some(Old),
        description: "Develop and maintain enterprise applications for global banking clients.",
    },
    Fixture {
        id: "job-13", title: "Product Manager", company: "Infosys",
        state: "Maharashtra", district: "Pune", job_type: FullTime,
        salary_min: 1_800_000, salary_max: 2_800_000, days_ago: 62, status: Some(Old),
        description: "Drive the roadmap for an internal digital transformation platform.",
    },
    Fixture {
        id: "job-14", title: "Data Science Lead", company: "Wipro",
        state: "Delhi", district: "New Delhi", job_type: FullTime,
        salary_min: 2_500_000, salary_max: 3_500_000, days_ago: 90, status: Some(Old),
        description: "Lead a team building forecasting and NLP models for retail clients.",
    },
    Fixture {
        id: "job-15", title: "Senior React Developer", company: "Flipkart",
        state: "Karnataka", district: "Bengaluru", job_type: FullTime,
        salary_min: 2_000_000, salary_max: 3_200_000, days_ago: 2, status: Some(Draft),
        description: "Build the next generation of the seller dashboard.",
    },
    Fixture {
        id: "job-16", title: "Digital Marketing Executive", company: "Reliance",
        state: "Maharashtra", district: "Mumbai", job_type: FullTime,
        salary_min: 400_000, salary_max: 650_000, days_ago: 1, status: Some(Draft),
        description: "Run performance campaigns for retail launches across social and search.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_ids_are_unique_and_ranges_ordered() {
        for set in [MALAYSIA, INDIA] {
            let ids: HashSet<&str> = set.iter().map(|f| f.id).collect();
            assert_eq!(ids.len(), set.len());
            assert!(set.iter().all(|f| f.salary_min <= f.salary_max));
        }
    }

    #[test]
    fn seeding_applies_region_currency() {
        assert!(seed(Region::India, 0).iter().all(|j| j.salary_currency == "INR"));
        assert!(seed(Region::Malaysia, 0).iter().all(|j| j.salary_currency == "MYR"));
    }
}
