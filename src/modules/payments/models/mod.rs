mod payment;

pub use payment::{NewPayment, Payment, PaymentMethod, PaymentPatch, PaymentState};
