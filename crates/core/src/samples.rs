//! Built-in demo inputs.

use serde::Serialize;

use crate::errors::InputError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

const ORDER_JSON: &str = r#"{
  "customer": "Acme Corp",
  "order_id": "ORD-12345",
  "items": [
    {"product": "Widget A", "quantity": 5, "price": 10.99},
    {"product": "Widget B", "quantity": 3, "price": 15.99}
  ],
  "total": 102.92
}"#;

const RFQ_EMAIL: &str = "From: john.doe@example.com
To: sales@company.com
Subject: Request for Quotation - Office Supplies

Hello,

We are interested in purchasing office supplies for our new branch.
Could you please quote the following items:

- 20 ergonomic chairs
- 10 height-adjustable desks
- 15 desk lamps

We would appreciate a response within the next week.

Best regards,
John Doe
Procurement Manager
Acme Corp";

const INQUIRY_EMAIL: &str = "From: jane.roe@example.org
To: support@company.com
Subject: Delivery times

Hi,

What are your usual delivery times to Lisbon?

Thanks,
Jane";

pub const SAMPLES: [Sample; 3] = [
    Sample {
        name: "order-json",
        description: "JSON purchase order with line items",
        content: ORDER_JSON,
    },
    Sample {
        name: "rfq-email",
        description: "Email asking for a quote on office supplies",
        content: RFQ_EMAIL,
    },
    Sample {
        name: "inquiry-email",
        description: "Plain email question with no quotation request",
        content: INQUIRY_EMAIL,
    },
];

pub fn all() -> &'static [Sample] {
    &SAMPLES
}

pub fn find(name: &str) -> Result<&'static Sample, InputError> {
    SAMPLES
        .iter()
        .find(|sample| sample.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| InputError::UnknownSample(name.to_string()))
}
