use std::fmt;

/// Dashboard role. Each role carries a default permission set; explicit
/// overrides are validated against the fixed permission list below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    MasterAdmin,
    UserManager,
    PaymentManager,
    NotificationManager,
    ContentManager,
    AnalyticsViewer,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::MasterAdmin => "master_admin",
            AdminRole::UserManager => "user_manager",
            AdminRole::PaymentManager => "payment_manager",
            AdminRole::NotificationManager => "notification_manager",
            AdminRole::ContentManager => "content_manager",
            AdminRole::AnalyticsViewer => "analytics_viewer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "master_admin" => Some(AdminRole::MasterAdmin),
            "user_manager" => Some(AdminRole::UserManager),
            "payment_manager" => Some(AdminRole::PaymentManager),
            "notification_manager" => Some(AdminRole::NotificationManager),
            "content_manager" => Some(AdminRole::ContentManager),
            "analytics_viewer" => Some(AdminRole::AnalyticsViewer),
            _ => None,
        }
    }

    pub fn default_permissions(&self) -> Vec<Permission> {
        use Permission::*;
        match self {
            AdminRole::MasterAdmin => vec![
                ViewUsers,
                ManageUsers,
                BanUsers,
                ViewTransactions,
                ManagePayments,
                SendNotifications,
                SendEmails,
                ViewAnalytics,
                ManageContent,
                ViewLogs,
            ],
            AdminRole::UserManager => vec![ViewUsers, ManageUsers, BanUsers],
            AdminRole::PaymentManager => vec![ViewTransactions, ManagePayments],
            AdminRole::NotificationManager => vec![SendNotifications, SendEmails],
            AdminRole::ContentManager => vec![ViewUsers, ManageContent],
            AdminRole::AnalyticsViewer => vec![ViewAnalytics, ViewLogs],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ViewUsers,
    ManageUsers,
    BanUsers,
    ViewTransactions,
    ManagePayments,
    SendNotifications,
    SendEmails,
    ViewAnalytics,
    ManageContent,
    ViewLogs,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewUsers => "view_users",
            Permission::ManageUsers => "manage_users",
            Permission::BanUsers => "ban_users",
            Permission::ViewTransactions => "view_transactions",
            Permission::ManagePayments => "manage_payments",
            Permission::SendNotifications => "send_notifications",
            Permission::SendEmails => "send_emails",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ManageContent => "manage_content",
            Permission::ViewLogs => "view_logs",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "view_users" => Some(Permission::ViewUsers),
            "manage_users" => Some(Permission::ManageUsers),
            "ban_users" => Some(Permission::BanUsers),
            "view_transactions" => Some(Permission::ViewTransactions),
            "manage_payments" => Some(Permission::ManagePayments),
            "send_notifications" => Some(Permission::SendNotifications),
            "send_emails" => Some(Permission::SendEmails),
            "view_analytics" => Some(Permission::ViewAnalytics),
            "manage_content" => Some(Permission::ManageContent),
            "view_logs" => Some(Permission::ViewLogs),
            _ => None,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates an explicit override list. Any name outside the fixed set
/// rejects the whole list.
pub fn validate_permissions(names: &[String]) -> Result<Vec<Permission>, String> {
    names
        .iter()
        .map(|name| Permission::parse(name).ok_or_else(|| name.clone()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|unknown| format!("Unknown permission '{}'", unknown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in [
            AdminRole::MasterAdmin,
            AdminRole::UserManager,
            AdminRole::PaymentManager,
            AdminRole::NotificationManager,
            AdminRole::ContentManager,
            AdminRole::AnalyticsViewer,
        ] {
            assert_eq!(AdminRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn master_admin_holds_every_permission() {
        assert_eq!(AdminRole::MasterAdmin.default_permissions().len(), 10);
    }

    #[test]
    fn override_list_with_an_unknown_name_is_rejected_whole() {
        let err = validate_permissions(&[
            "view_users".to_string(),
            "launch_missiles".to_string(),
        ])
        .unwrap_err();

        assert!(err.contains("launch_missiles"));
    }

    #[test]
    fn valid_override_list_parses_in_order() {
        let permissions = validate_permissions(&[
            "ban_users".to_string(),
            "view_logs".to_string(),
        ])
        .unwrap();

        assert_eq!(permissions, vec![Permission::BanUsers, Permission::ViewLogs]);
    }
}
