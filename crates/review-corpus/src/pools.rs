//! Fixed value pools the generator draws from.
//!
//! Pool order is part of the determinism contract: reordering any pool
//! changes every generated document.

pub const CUSTODIANS: &[&str] = &[
    "A. Rivera",
    "B. Chen",
    "C. Patel",
    "D. Nguyen",
    "E. Johnson",
    "F. Smith",
];

pub const DOCTYPES: &[&str] = &[
    "Email",
    "Memo",
    "Contract",
    "Invoice",
    "Meeting Notes",
    "Chat Log",
];

pub const TAGS: &[&str] = &[
    "NDA",
    "Termination",
    "Pricing",
    "IP",
    "HR",
    "Compliance",
    "Litigation Hold",
];

pub const SUBJECTS: &[&str] = &[
    "Follow-up on vendor terms",
    "Re: contract redlines",
    "Invoice discrepancy",
    "Project timeline update",
    "Termination discussion",
    "NDA execution status",
    "Privilege review note",
    "Compliance training schedule",
    "Breach of contract",
    "Contract modification request",
    "Hold notice acknowledgement",
    "IP assignment question",
];

pub const BODIES: &[&str] = &[
    "Please see the attached draft. Key issues: payment timing, confidentiality scope, and termination for convenience.",
    "Per our call, I’ve summarized the main points. We should confirm whether pricing is fixed or subject to annual adjustment.",
    "This looks like it may contain attorney-client material. Please route to counsel for privilege review.",
    "Reminder: do not delete documents potentially relevant to the matter. Preserve emails, chats, and shared drive files.",
    "I reviewed the redlines. The NDA definition of Confidential Information is broad; consider narrowing to written disclosures.",
    "Noted that the vendor has requested a 30-day cure period. We may want 10 days for non-payment defaults.",
    "The invoice includes an extra line item. Please confirm whether the fee was authorized under the SOW.",
    "If termination is contemplated, document the performance issues and ensure HR policy is followed.",
    "The agreement references IP ownership. Confirm whether work product is a ‘work made for hire’ where applicable.",
    "What time are we teeing off on Saturday?",
    "Can you share the project timeline with the team? Also, did you see the Falcons win last night? Unbelievable finish!",
];

/// Doctype whose documents may carry the privileged label.
pub const PRIVILEGE_DOCTYPE: &str = "Email";

/// Tags that mark a document responsive in the ground truth.
pub const RESPONSIVE_TAGS: &[&str] = &["Litigation Hold", "Termination", "NDA"];

/// Year every synthetic document is dated in.
pub const CORPUS_YEAR: i32 = 2025;

/// Months are drawn from `1..=MONTH_SPAN`.
pub const MONTH_SPAN: u32 = 8;

/// Days are drawn from `1..=DAY_SPAN`.
pub const DAY_SPAN: u32 = 26;

/// Closing line appended to every body.
pub const END_OF_DOCUMENT: &str = "— End of document —";
