use super::*;
use crate::net::types::{LeadDetails, LeadStatus};

fn filled() -> LeadForm {
    LeadForm {
        company: " Zambeef ".to_owned(),
        contact_name: "Mwila Phiri".to_owned(),
        deal_value: "12,500".to_owned(),
        ..LeadForm::default()
    }
}

#[test]
fn from_lead_prefills_present_fields() {
    let lead = Lead {
        id: 1,
        status: LeadStatus::New,
        details: LeadDetails {
            company: Some("Zambeef".to_owned()),
            deal_value: Some(2500.0),
            priority: Some("high".to_owned()),
            ..LeadDetails::default()
        },
    };
    let form = LeadForm::from_lead(&lead);
    assert_eq!(form.company, "Zambeef");
    assert_eq!(form.deal_value, "2500");
    assert_eq!(form.priority, "high");
    assert_eq!(form.phone, "");
}

#[test]
fn set_and_get_address_the_same_field() {
    let mut form = LeadForm::default();
    for field in LeadField::ALL {
        form.set(field, field.label().to_owned());
    }
    for field in LeadField::ALL {
        assert_eq!(form.get(field), field.label());
    }
}

#[test]
fn to_draft_trims_and_omits_blank_fields() {
    let draft = filled().to_draft().unwrap();
    assert_eq!(draft.company.as_deref(), Some("Zambeef"));
    assert_eq!(draft.contact_name.as_deref(), Some("Mwila Phiri"));
    assert_eq!(draft.deal_value, Some(12_500.0));
    assert_eq!(draft.phone, None);
    assert_eq!(draft.status, None);
}

#[test]
fn to_draft_requires_company() {
    let form = LeadForm { company: "   ".to_owned(), ..filled() };
    assert_eq!(form.to_draft(), Err(LeadFormError::MissingCompany));
}

#[test]
fn to_draft_rejects_bad_deal_value() {
    let form = LeadForm { deal_value: "lots".to_owned(), ..filled() };
    assert_eq!(form.to_draft(), Err(LeadFormError::InvalidDealValue("lots".to_owned())));
    let negative = LeadForm { deal_value: "-5".to_owned(), ..filled() };
    assert!(negative.to_draft().is_err());
}

#[test]
fn blank_deal_value_is_omitted() {
    let form = LeadForm { deal_value: String::new(), ..filled() };
    assert_eq!(form.to_draft().unwrap().deal_value, None);
}
