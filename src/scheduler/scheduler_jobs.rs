mod emails_send_job;

pub(crate) use emails_send_job::EmailsSendJob;
