mod emails_jobs_list;
mod emails_jobs_remove;
mod emails_jobs_run;
mod emails_jobs_schedule;
mod emails_send;
mod security_login;
mod security_signup;
mod status_get;
mod users_get;
mod users_get_self;
mod users_list;
mod users_remove;
mod users_update;

pub use self::{
    emails_jobs_list::emails_jobs_list, emails_jobs_remove::emails_jobs_remove,
    emails_jobs_run::emails_jobs_run, emails_jobs_schedule::emails_jobs_schedule,
    emails_send::emails_send, security_login::security_login, security_signup::security_signup,
    status_get::status_get, users_get::users_get, users_get_self::users_get_self,
    users_list::users_list, users_remove::users_remove, users_update::users_update,
};
