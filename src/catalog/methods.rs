//! Authored method tables for each Zoho service.

use super::Service;

/// A callable integration task scoped to one service.
///
/// `parameter_signature` is display text only (e.g. `"(module_name, connection)"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: &'static str,
    pub parameter_signature: &'static str,
    pub description: &'static str,
    pub return_type_label: &'static str,
}

const fn method(
    name: &'static str,
    parameter_signature: &'static str,
    description: &'static str,
    return_type_label: &'static str,
) -> MethodDescriptor {
    MethodDescriptor {
        name,
        parameter_signature,
        description,
        return_type_label,
    }
}

static CRM: [MethodDescriptor; 11] = [
    method(
        "getRecords",
        "(module_name, page, per_page, query_value, connection)",
        "Fetches records from specified CRM module",
        "Map",
    ),
    method(
        "getRecordById",
        "(module_name, record_id, connection)",
        "Fetches a specific record by ID",
        "Map",
    ),
    method(
        "createRecord",
        "(module_name, data_map, connection)",
        "Creates a new record",
        "Map",
    ),
    method(
        "updateRecord",
        "(module_name, record_id, data_map, connection)",
        "Updates an existing record",
        "Map",
    ),
    method(
        "searchRecords",
        "(module_name, criteria, connection)",
        "Searches records based on criteria",
        "List",
    ),
    method(
        "getRelatedRecords",
        "(related_module, parent_module, record_id, connection)",
        "Fetches related records",
        "List",
    ),
    method(
        "updateRelatedRecord",
        "(module, record_id, parent_module, parent_id, data_map, connection)",
        "Updates a related record",
        "Map",
    ),
    method(
        "convertLead",
        "(module, record_id, data_map, connection)",
        "Converts a lead to contact/deal",
        "Map",
    ),
    method(
        "bulkCreate",
        "(module_name, data_list, connection)",
        "Creates multiple records",
        "List",
    ),
    method(
        "upsert",
        "(module_name, data_map, connection)",
        "Insert or update record",
        "Map",
    ),
    method(
        "attachFile",
        "(module_name, record_id, file, connection)",
        "Attaches file to record",
        "Map",
    ),
];

static DESK: [MethodDescriptor; 11] = [
    method(
        "getRecords",
        "(org_id, module_name, from_index, limit, connection)",
        "Fetches records from Desk module",
        "List",
    ),
    method(
        "getRecordById",
        "(org_id, module_name, record_id, connection)",
        "Fetches specific Desk record",
        "Map",
    ),
    method(
        "create",
        "(org_id, module_name, data_map, connection)",
        "Creates a Desk record",
        "Map",
    ),
    method(
        "update",
        "(org_id, module_name, record_id, data_map, connection)",
        "Updates a Desk record",
        "Map",
    ),
    method(
        "searchRecords",
        "(org_id, module_name, query, from_index, limit, connection)",
        "Searches Desk records",
        "List",
    ),
    method(
        "getRelatedRecords",
        "(org_id, related_module, parent_module, parent_id, from_index, limit, connection)",
        "Fetches related Desk records",
        "List",
    ),
    method(
        "createRelatedRecord",
        "(org_id, related_module, parent_module, parent_id, data_map, connection)",
        "Creates related Desk record",
        "Map",
    ),
    method(
        "updateRelatedRecord",
        "(org_id, related_module, record_id, parent_module, parent_id, data_map, connection)",
        "Updates related Desk record",
        "Map",
    ),
    method(
        "move",
        "(org_id, ticket_id, department_id, connection)",
        "Moves ticket to department",
        "Map",
    ),
    method(
        "split",
        "(org_id, ticket_id, thread_id, connection)",
        "Splits reply as new ticket",
        "Map",
    ),
    method(
        "merge",
        "(org_id, ticket_ids, connection)",
        "Merges multiple tickets",
        "Map",
    ),
];

static BOOKS: [MethodDescriptor; 7] = [
    method(
        "getOrganizations",
        "(connection)",
        "Fetches Zoho Books organizations",
        "List",
    ),
    method(
        "getList",
        "(module_name, org_id, per_page, page, connection)",
        "Fetches records from module",
        "List",
    ),
    method(
        "retrieve",
        "(module_name, org_id, record_id, connection)",
        "Fetches specific record",
        "Map",
    ),
    method(
        "create",
        "(module_name, org_id, data_map, connection)",
        "Creates a Books record",
        "Map",
    ),
    method(
        "update",
        "(module_name, org_id, record_id, data_map, connection)",
        "Updates a Books record",
        "Map",
    ),
    method(
        "markStatus",
        "(module_name, org_id, record_id, status, connection)",
        "Changes record status",
        "Map",
    ),
    method(
        "getTemplates",
        "(org_id, connection)",
        "Fetches invoice templates",
        "List",
    ),
];

static BILLING: [MethodDescriptor; 5] = [
    method(
        "getOrganizations",
        "(connection)",
        "Fetches Billing organizations",
        "List",
    ),
    method(
        "getList",
        "(module_name, org_id, per_page, page, connection)",
        "Fetches records",
        "List",
    ),
    method(
        "retrieve",
        "(module_name, org_id, record_id, connection)",
        "Fetches specific record",
        "Map",
    ),
    method(
        "create",
        "(module_name, org_id, data_map, connection)",
        "Creates a record",
        "Map",
    ),
    method(
        "update",
        "(module_name, org_id, record_id, data_map, connection)",
        "Updates a record",
        "Map",
    ),
];

static PROJECTS: [MethodDescriptor; 7] = [
    method(
        "getRecords",
        "(portal, project_id, module, from_index, limit, connection)",
        "Fetches project records",
        "List",
    ),
    method(
        "getProjectDetails",
        "(portal, connection)",
        "Fetches project details",
        "List",
    ),
    method(
        "create",
        "(portal, project_id, module, data_map, connection)",
        "Creates project record",
        "Map",
    ),
    method(
        "update",
        "(portal, project_id, module, record_id, data_map, connection)",
        "Updates project record",
        "Map",
    ),
    method(
        "associateLogs",
        "(portal, project_id, module, record_id, log_data, connection)",
        "Creates time log",
        "Map",
    ),
    method(
        "updateAssociateLogs",
        "(portal, project_id, log_id, module, record_id, log_data, connection)",
        "Updates time log",
        "Map",
    ),
    method(
        "getPortals",
        "(connection)",
        "Fetches project portals",
        "List",
    ),
];

static AI: [MethodDescriptor; 7] = [
    method(
        "translate",
        "(text, target_lang, source_lang)",
        "Translates text between languages",
        "String",
    ),
    method(
        "extractKeywords",
        "(text)",
        "Extracts keywords from text",
        "List",
    ),
    method(
        "detectObject",
        "(image_url)",
        "Detects objects in image",
        "Map",
    ),
    method("detectFace", "(image_url)", "Detects faces in image", "Map"),
    method(
        "recognizeText",
        "(image_url, model_type, language)",
        "Performs OCR on image",
        "String",
    ),
    method(
        "analyseSentiment",
        "(text)",
        "Analyzes sentiment of text",
        "Map",
    ),
    method(
        "predictLanguage",
        "(text)",
        "Predicts language of text",
        "String",
    ),
];

/// Methods authored for `service`, in display order.
///
/// Services without an authored table yield an empty slice.
pub fn methods(service: Service) -> &'static [MethodDescriptor] {
    match service {
        Service::Crm => &CRM,
        Service::Desk => &DESK,
        Service::Books => &BOOKS,
        Service::Billing => &BILLING,
        Service::Projects => &PROJECTS,
        Service::Ai => &AI,
        Service::Recruit
        | Service::People
        | Service::Inventory
        | Service::Mail
        | Service::Cliq
        | Service::Sign
        | Service::Writer
        | Service::Workdrive
        | Service::Fsm
        | Service::Analytics
        | Service::Campaigns
        | Service::Commerce
        | Service::Expense
        | Service::Subscriptions
        | Service::Directory
        | Service::Connect
        | Service::Sheet
        | Service::Calendar
        | Service::Bookings
        | Service::Map
        | Service::Salesiq => &[],
    }
}

/// String-keyed variant of [`methods`]; unknown identifiers yield an empty slice.
pub fn list_methods(service: &str) -> &'static [MethodDescriptor] {
    Service::from_identifier(service)
        .map(methods)
        .unwrap_or_default()
}
