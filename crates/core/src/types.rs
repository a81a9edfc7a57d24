/// Primary keys are caller-supplied PostgreSQL BIGINTs.
pub type DbId = i64;
