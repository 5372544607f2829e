//! # Programme Seed Data
//!
//! The 80 Healthy City programme standards and the default roster of
//! responsible agencies, loaded once at startup. Standards are grouped by
//! programme domain; each carries the evidence its review committee
//! expects and the agencies answerable for it.

use std::collections::BTreeSet;

use hcity_core::{AgencySlug, StandardId, ValidationError};

use crate::catalog::{Standard, StandardCatalog};
use crate::index::Agency;

/// `(id, description, evidence requirements, responsible agency slugs)`.
type SeedRow = (
    u16,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
);

/// `(slug, display name)` for the default agency roster.
const AGENCIES: &[(&str, &str)] = &[
    ("ministry-of-health", "Ministry of Health"),
    ("municipality", "Municipality"),
    ("environment-authority", "Environment Authority"),
    ("ministry-of-education", "Ministry of Education"),
    ("traffic-department", "Traffic Department"),
    ("civil-defense", "Civil Defense"),
    ("food-safety-authority", "Food Safety Authority"),
    ("water-authority", "Water Authority"),
    ("ministry-of-social-affairs", "Ministry of Social Affairs"),
    ("youth-sports-authority", "Youth and Sports Authority"),
    ("ministry-of-labor", "Ministry of Labor"),
    ("agriculture-department", "Agriculture Department"),
    ("ministry-of-interior", "Ministry of Interior"),
    ("red-crescent", "Red Crescent Society"),
    ("chamber-of-commerce", "Chamber of Commerce"),
    ("ministry-of-awqaf", "Ministry of Awqaf and Religious Affairs"),
];

const STANDARDS: &[SeedRow] = &[
    // Governance and community participation (1-8)
    (1, "A city health council with representatives from all member agencies meets at least quarterly",
        &["Council charter and membership list", "Minutes of the last four meetings"],
        &["municipality", "ministry-of-health"]),
    (2, "An approved city health profile is published and updated every two years",
        &["Current city health profile document", "Publication record"],
        &["municipality", "ministry-of-health"]),
    (3, "Neighborhood committees participate in setting local health priorities",
        &["Committee rosters by district", "Priority-setting workshop reports"],
        &["municipality", "ministry-of-social-affairs"]),
    (4, "The city allocates a dedicated annual budget line for Healthy City activities",
        &["Approved budget extract", "Expenditure report for the previous year"],
        &["municipality"]),
    (5, "Volunteer networks are trained and active in every district",
        &["Volunteer registry", "Training curriculum and attendance records"],
        &["red-crescent", "ministry-of-social-affairs"]),
    (6, "Local businesses are enrolled in a workplace health charter",
        &["Signed charters", "List of enrolled establishments"],
        &["chamber-of-commerce", "ministry-of-labor"]),
    (7, "Religious and community leaders are engaged in health promotion campaigns",
        &["Campaign plans naming participating leaders", "Event documentation"],
        &["ministry-of-awqaf"]),
    (8, "An intersectoral coordination plan assigns each programme standard to a lead agency",
        &["Coordination plan with agency assignments"],
        &["municipality"]),
    // Environment and sanitation (9-16)
    (9, "Household solid waste is collected at least three times per week in all districts",
        &["Collection schedules by district", "Contractor performance reports"],
        &["municipality"]),
    (10, "A sanitary landfill or controlled disposal site serves the city",
        &["Site operating license", "Environmental monitoring results"],
        &["municipality", "environment-authority"]),
    (11, "Ambient air quality is monitored and results published monthly",
        &["Monitoring station locations", "Twelve months of published readings"],
        &["environment-authority"]),
    (12, "Industrial facilities hold valid emission permits and are inspected annually",
        &["Permit register", "Inspection reports for the past year"],
        &["environment-authority", "ministry-of-labor"]),
    (13, "Green space per capita meets the programme target of nine square meters",
        &["Green space inventory with area calculations"],
        &["municipality", "agriculture-department"]),
    (14, "Stray animal populations are managed through a humane control programme",
        &["Programme description", "Activity records"],
        &["municipality", "agriculture-department"]),
    (15, "Public markets are cleaned daily and disinfected weekly",
        &["Cleaning schedules", "Inspection checklists with photographs"],
        &["municipality", "food-safety-authority"]),
    (16, "Wastewater is treated before discharge and effluent quality is tested monthly",
        &["Treatment plant operating records", "Monthly effluent laboratory results"],
        &["water-authority", "environment-authority"]),
    // Water and food safety (17-24)
    (17, "Drinking water is sampled at distribution points every month and results meet national limits",
        &["Sampling plan and site map", "Twelve months of laboratory results"],
        &["water-authority", "ministry-of-health"]),
    (18, "All residents have piped drinking water or an approved alternative supply",
        &["Coverage survey by district"],
        &["water-authority"]),
    (19, "Water storage tanks in public buildings are cleaned and certified twice yearly",
        &["Cleaning certificates", "Building inventory"],
        &["water-authority", "municipality"]),
    (20, "Food establishments hold valid health licenses and display them publicly",
        &["License register", "Spot-check reports"],
        &["food-safety-authority", "municipality"]),
    (21, "Food handlers complete certified hygiene training before employment",
        &["Training certificates sample", "Registry of certified handlers"],
        &["food-safety-authority", "ministry-of-health"]),
    (22, "High-risk food premises are inspected at least four times per year",
        &["Risk classification list", "Inspection records"],
        &["food-safety-authority"]),
    (23, "Foodborne illness outbreaks are investigated within 48 hours of notification",
        &["Outbreak investigation protocol", "Case investigation reports"],
        &["ministry-of-health", "food-safety-authority"]),
    (24, "Slaughterhouses operate under continuous veterinary supervision",
        &["Veterinary staffing roster", "Condemnation records"],
        &["agriculture-department", "food-safety-authority"]),
    // Health services and primary care (25-33)
    (25, "Every district has a primary health care center within five kilometers of all residents",
        &["Facility map with catchment areas"],
        &["ministry-of-health"]),
    (26, "Primary care centers stock all essential medicines on the national list",
        &["Stock audit reports", "Stock-out log"],
        &["ministry-of-health"]),
    (27, "Emergency ambulance response time averages under fifteen minutes",
        &["Dispatch records with response time analysis"],
        &["ministry-of-health", "red-crescent"]),
    (28, "Referral pathways from primary care to hospitals are documented and functioning",
        &["Referral protocol", "Referral register sample"],
        &["ministry-of-health"]),
    (29, "Mental health services are available at the primary care level",
        &["Service description", "Trained staff roster"],
        &["ministry-of-health"]),
    (30, "Elderly residents receive annual home-based health assessments on request",
        &["Programme enrollment figures", "Visit records"],
        &["ministry-of-health", "ministry-of-social-affairs"]),
    (31, "People with disabilities can physically access all public health facilities",
        &["Accessibility audit of each facility", "Remediation plan"],
        &["ministry-of-health", "municipality"]),
    (32, "A community pharmacy network provides after-hours coverage in every district",
        &["Duty rota", "Published after-hours schedule"],
        &["ministry-of-health"]),
    (33, "Health facility waste is segregated and disposed of through licensed medical waste channels",
        &["Waste management contracts", "Segregation audit reports"],
        &["ministry-of-health", "environment-authority"]),
    // Maternal and child health (34-40)
    (34, "All pregnant women are offered at least four antenatal care visits",
        &["Antenatal coverage statistics", "Clinic appointment records"],
        &["ministry-of-health"]),
    (35, "Skilled birth attendance covers at least 95% of deliveries",
        &["Delivery statistics by facility"],
        &["ministry-of-health"]),
    (36, "Newborns are screened for congenital conditions before discharge",
        &["Screening protocol", "Monthly screening coverage reports"],
        &["ministry-of-health"]),
    (37, "Growth monitoring is performed at every well-child visit up to age five",
        &["Growth chart audit sample"],
        &["ministry-of-health"]),
    (38, "Breastfeeding support counselors are available in maternity facilities",
        &["Counselor roster", "Facility certification records"],
        &["ministry-of-health"]),
    (39, "School entry requires a completed childhood immunization record",
        &["Enrollment policy", "Verification reports from schools"],
        &["ministry-of-education", "ministry-of-health"]),
    (40, "Child nutrition programmes reach families identified as food-insecure",
        &["Beneficiary registry", "Distribution records"],
        &["ministry-of-social-affairs", "ministry-of-health"]),
    // Communicable disease control (41-47)
    (41, "Seasonal vaccination campaigns reach at least 90% of the target population",
        &["Campaign micro-plans", "Coverage survey results"],
        &["ministry-of-health"]),
    (42, "Notifiable diseases are reported to the central registry within 24 hours",
        &["Notification protocol", "Timeliness audit of recent reports"],
        &["ministry-of-health"]),
    (43, "Vector breeding sites are surveyed and treated on a monthly cycle",
        &["Survey maps", "Treatment logs"],
        &["municipality", "ministry-of-health"]),
    (44, "Tuberculosis patients are enrolled in directly observed treatment",
        &["Enrollment statistics", "Treatment outcome reports"],
        &["ministry-of-health"]),
    (45, "Cold chain equipment for vaccines is temperature-logged continuously",
        &["Temperature log extracts", "Equipment maintenance records"],
        &["ministry-of-health"]),
    (46, "Public awareness campaigns on hand hygiene run at least twice yearly",
        &["Campaign materials", "Reach and frequency reports"],
        &["ministry-of-health", "ministry-of-education"]),
    (47, "An isolation and quarantine plan is maintained and exercised annually",
        &["Current plan document", "Exercise after-action report"],
        &["ministry-of-health", "civil-defense"]),
    // Chronic disease and healthy lifestyle (48-54)
    (48, "Adults over forty are offered annual screening for diabetes and hypertension",
        &["Screening programme description", "Annual screening statistics"],
        &["ministry-of-health"]),
    (49, "Public walking tracks are available within two kilometers of every neighborhood",
        &["Track inventory with locations", "Site photographs"],
        &["municipality", "youth-sports-authority"]),
    (50, "Schools provide at least three physical education sessions per week",
        &["Curriculum timetables", "Ministry circular"],
        &["ministry-of-education", "youth-sports-authority"]),
    (51, "Community sports facilities offer free public hours every week",
        &["Facility schedules", "Attendance figures"],
        &["youth-sports-authority"]),
    (52, "Restaurants display calorie information for standard menu items",
        &["Sampling survey of menus", "Regulation or circular requiring display"],
        &["food-safety-authority", "chamber-of-commerce"]),
    (53, "Cancer screening programmes for breast and colorectal cancer are operating",
        &["Programme protocols", "Uptake statistics"],
        &["ministry-of-health"]),
    (54, "Dietary counseling is available at primary care centers",
        &["Dietitian staffing roster", "Referral statistics"],
        &["ministry-of-health"]),
    // Road and traffic safety (55-60)
    (55, "Pedestrian crossings near schools have signals or crossing guards",
        &["School zone inventory", "Deployment records"],
        &["traffic-department", "ministry-of-education"]),
    (56, "Road traffic injuries are recorded in a unified city database",
        &["Database description", "Annual injury report"],
        &["traffic-department", "ministry-of-health"]),
    (57, "High-risk intersections identified by crash data are re-engineered",
        &["Blackspot analysis", "Completed works list"],
        &["traffic-department", "municipality"]),
    (58, "Seat belt and child restraint enforcement campaigns run quarterly",
        &["Campaign schedules", "Citation statistics"],
        &["traffic-department", "ministry-of-interior"]),
    (59, "Speed limits near schools and hospitals are 30 km/h or lower and signed",
        &["Signage inventory with photographs"],
        &["traffic-department"]),
    (60, "Street lighting covers all arterial roads and marked crossings",
        &["Lighting coverage survey", "Maintenance response records"],
        &["municipality"]),
    // Education and health literacy (61-66)
    (61, "Health education is embedded in the school curriculum at every grade",
        &["Curriculum extracts", "Teacher training records"],
        &["ministry-of-education", "ministry-of-health"]),
    (62, "School canteens meet national healthy food standards",
        &["Canteen inspection reports", "Approved food list"],
        &["ministry-of-education", "food-safety-authority"]),
    (63, "Every school has a trained first-aid officer and stocked first-aid kit",
        &["Officer certification list", "Kit inspection checklist"],
        &["ministry-of-education", "red-crescent"]),
    (64, "Adult literacy programmes include a health literacy module",
        &["Module syllabus", "Enrollment figures"],
        &["ministry-of-education", "ministry-of-social-affairs"]),
    (65, "School buildings are inspected annually for safety and sanitation",
        &["Inspection schedule", "Reports for all schools"],
        &["ministry-of-education", "civil-defense"]),
    (66, "Anti-bullying and mental wellbeing programmes operate in all schools",
        &["Programme description", "Implementation reports"],
        &["ministry-of-education"]),
    // Emergency preparedness (67-72)
    (67, "A city emergency response plan is updated annually and covers health emergencies",
        &["Current plan with revision history"],
        &["civil-defense", "ministry-of-interior"]),
    (68, "Public buildings hold valid civil defense safety certificates",
        &["Certificate register", "Inspection backlog report"],
        &["civil-defense"]),
    (69, "A multi-agency emergency exercise is conducted at least once per year",
        &["Exercise scenario", "After-action report with corrective actions"],
        &["civil-defense", "ministry-of-health", "red-crescent"]),
    (70, "Flood-prone areas are mapped and drainage cleaned before the rainy season",
        &["Risk maps", "Pre-season maintenance records"],
        &["municipality", "civil-defense"]),
    (71, "Emergency shelters are designated with capacity for five percent of residents",
        &["Shelter list with capacities", "Readiness inspection reports"],
        &["civil-defense", "ministry-of-social-affairs"]),
    (72, "First responders are trained in mass casualty triage",
        &["Training curriculum", "Certification roster"],
        &["red-crescent", "civil-defense"]),
    // Social welfare and occupational health (73-77)
    (73, "Households below the poverty line are enrolled in social support programmes",
        &["Enrollment statistics against survey baseline"],
        &["ministry-of-social-affairs"]),
    (74, "Shelters for victims of domestic violence operate with trained staff",
        &["Facility descriptions", "Staff training records"],
        &["ministry-of-social-affairs", "ministry-of-interior"]),
    (75, "Workplaces with occupational hazards are inspected annually",
        &["Hazard registry", "Inspection reports"],
        &["ministry-of-labor"]),
    (76, "Occupational injury statistics are published yearly by sector",
        &["Published annual report"],
        &["ministry-of-labor"]),
    (77, "Child labor complaints are investigated within one week",
        &["Complaint log with resolution times"],
        &["ministry-of-labor", "ministry-of-social-affairs"]),
    // Tobacco control and public spaces (78-80)
    (78, "Smoking is prohibited and enforced in all enclosed public places",
        &["Enforcement regulation", "Violation statistics"],
        &["ministry-of-health", "municipality"]),
    (79, "Tobacco sales to minors are monitored through test purchasing",
        &["Test purchase protocol", "Quarterly results"],
        &["ministry-of-interior", "ministry-of-health"]),
    (80, "Smoking cessation clinics operate in at least three primary care centers",
        &["Clinic locations and schedules", "Quit-rate statistics"],
        &["ministry-of-health"]),
];

/// The default agency roster.
pub fn default_agencies() -> Result<Vec<Agency>, ValidationError> {
    AGENCIES
        .iter()
        .map(|(slug, name)| {
            Ok(Agency {
                slug: AgencySlug::new(*slug)?,
                name: (*name).to_string(),
            })
        })
        .collect()
}

/// The full 80-standard programme catalog with default assignments.
pub fn default_catalog() -> Result<StandardCatalog, ValidationError> {
    let mut standards = Vec::with_capacity(STANDARDS.len());
    for (id, text, requirements, agencies) in STANDARDS {
        let mut assigned = BTreeSet::new();
        for slug in *agencies {
            assigned.insert(AgencySlug::new(*slug)?);
        }
        standards.push(Standard {
            id: StandardId::new(*id)?,
            text: (*text).to_string(),
            requirements: requirements.iter().map(|r| (*r).to_string()).collect(),
            assigned_agencies: assigned,
        });
    }
    StandardCatalog::from_standards(standards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::AgencyStandardsIndex;

    #[test]
    fn catalog_loads_with_eighty_standards() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.len(), 80);
        let ids: Vec<u16> = catalog.ids().map(|id| id.get()).collect();
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&80));
    }

    #[test]
    fn every_standard_has_an_assigned_agency() {
        let catalog = default_catalog().unwrap();
        for standard in catalog.list() {
            assert!(
                !standard.assigned_agencies.is_empty(),
                "standard {} has no responsible agency",
                standard.id
            );
        }
    }

    #[test]
    fn every_seed_agency_slug_is_in_the_roster() {
        let catalog = default_catalog().unwrap();
        let roster = default_agencies().unwrap();
        for standard in catalog.list() {
            for slug in &standard.assigned_agencies {
                assert!(
                    roster.iter().any(|a| &a.slug == slug),
                    "standard {} names unrostered agency {slug}",
                    standard.id
                );
            }
        }
    }

    #[test]
    fn seed_index_is_bidirectionally_consistent() {
        let catalog = default_catalog().unwrap();
        let index = AgencyStandardsIndex::build(&catalog, default_agencies().unwrap());
        index.verify_consistent(&catalog).unwrap();
        assert_eq!(index.len(), 16);
    }

    #[test]
    fn health_ministry_carries_the_largest_portfolio() {
        let catalog = default_catalog().unwrap();
        let index = AgencyStandardsIndex::build(&catalog, default_agencies().unwrap());
        let health = AgencySlug::new("ministry-of-health").unwrap();
        let health_count = index.standards_for(&health).len();
        for (agency, count) in index.agencies() {
            assert!(
                count <= health_count,
                "{} has {count} standards, more than the health ministry's {health_count}",
                agency.slug
            );
        }
    }
}
