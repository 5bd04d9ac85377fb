//! Zoho service identifiers reachable through the `zoho.` namespace.

use std::fmt;

/// A Zoho service namespace recognised after `zoho.`.
///
/// Variant order is the matching order used by the trigger-context resolver,
/// so [`Service::ALL`] must stay in sync with the declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    Crm,
    Desk,
    Books,
    Billing,
    Projects,
    Recruit,
    People,
    Inventory,
    Mail,
    Cliq,
    Sign,
    Writer,
    Workdrive,
    Fsm,
    Analytics,
    Campaigns,
    Commerce,
    Expense,
    Subscriptions,
    Directory,
    Connect,
    Sheet,
    Calendar,
    Bookings,
    Map,
    Salesiq,
    Ai,
}

impl Service {
    /// Every known service, in resolver matching order.
    pub const ALL: [Service; 27] = [
        Service::Crm,
        Service::Desk,
        Service::Books,
        Service::Billing,
        Service::Projects,
        Service::Recruit,
        Service::People,
        Service::Inventory,
        Service::Mail,
        Service::Cliq,
        Service::Sign,
        Service::Writer,
        Service::Workdrive,
        Service::Fsm,
        Service::Analytics,
        Service::Campaigns,
        Service::Commerce,
        Service::Expense,
        Service::Subscriptions,
        Service::Directory,
        Service::Connect,
        Service::Sheet,
        Service::Calendar,
        Service::Bookings,
        Service::Map,
        Service::Salesiq,
        Service::Ai,
    ];

    /// The identifier as written in Deluge source (`zoho.<identifier>.`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Service::Crm => "crm",
            Service::Desk => "desk",
            Service::Books => "books",
            Service::Billing => "billing",
            Service::Projects => "projects",
            Service::Recruit => "recruit",
            Service::People => "people",
            Service::Inventory => "inventory",
            Service::Mail => "mail",
            Service::Cliq => "cliq",
            Service::Sign => "sign",
            Service::Writer => "writer",
            Service::Workdrive => "workdrive",
            Service::Fsm => "fsm",
            Service::Analytics => "analytics",
            Service::Campaigns => "campaigns",
            Service::Commerce => "commerce",
            Service::Expense => "expense",
            Service::Subscriptions => "subscriptions",
            Service::Directory => "directory",
            Service::Connect => "connect",
            Service::Sheet => "sheet",
            Service::Calendar => "calendar",
            Service::Bookings => "bookings",
            Service::Map => "map",
            Service::Salesiq => "salesiq",
            Service::Ai => "ai",
        }
    }

    /// Look up a service by its exact (case-sensitive) identifier.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == identifier)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service offered as a completion right after `zoho.`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub service: Service,
    pub display_label: &'static str,
}

impl ServiceDescriptor {
    const fn new(service: Service, display_label: &'static str) -> Self {
        Self {
            service,
            display_label,
        }
    }

    pub fn identifier(&self) -> &'static str {
        self.service.as_str()
    }
}

// Curated subset of Service::ALL; services missing here are still resolved
// after `zoho.<name>.` but are not suggested after `zoho.`.
static SERVICES: [ServiceDescriptor; 15] = [
    ServiceDescriptor::new(Service::Crm, "Zoho CRM integration tasks"),
    ServiceDescriptor::new(Service::Desk, "Zoho Desk integration tasks"),
    ServiceDescriptor::new(Service::Books, "Zoho Books integration tasks"),
    ServiceDescriptor::new(Service::Billing, "Zoho Billing integration tasks"),
    ServiceDescriptor::new(Service::Projects, "Zoho Projects integration tasks"),
    ServiceDescriptor::new(Service::Recruit, "Zoho Recruit integration tasks"),
    ServiceDescriptor::new(Service::People, "Zoho People integration tasks"),
    ServiceDescriptor::new(Service::Inventory, "Zoho Inventory integration tasks"),
    ServiceDescriptor::new(Service::Mail, "Zoho Mail integration tasks"),
    ServiceDescriptor::new(Service::Cliq, "Zoho Cliq integration tasks"),
    ServiceDescriptor::new(Service::Sign, "Zoho Sign integration tasks"),
    ServiceDescriptor::new(Service::Writer, "Zoho Writer integration tasks"),
    ServiceDescriptor::new(Service::Workdrive, "Zoho WorkDrive integration tasks"),
    ServiceDescriptor::new(Service::Fsm, "Zoho FSM integration tasks"),
    ServiceDescriptor::new(Service::Ai, "Zoho AI tasks"),
];

/// Services suggested after `zoho.`, in display order.
pub fn list_services() -> &'static [ServiceDescriptor] {
    &SERVICES
}
