///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        email -> Text,
        password -> Text,
        role -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Organizations
///////////////////////////////////////////////////////////////////////

table! {
    organization (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        description -> Text,
        thumbnail_url -> Nullable<Text>,
        banner_url -> Nullable<Text>,
        visibility -> SmallInt,
        created_at -> BigInt,
    }
}

table! {
    organization_admin (org_rowid, user_id) {
        org_rowid -> BigInt,
        user_id -> BigInt,
    }
}

joinable!(organization_admin -> organization (org_rowid));
joinable!(organization_admin -> users (user_id));

table! {
    organization_member (org_rowid, user_id) {
        org_rowid -> BigInt,
        user_id -> BigInt,
    }
}

joinable!(organization_member -> organization (org_rowid));
joinable!(organization_member -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    event (rowid) {
        rowid -> BigInt,
        id -> Text,
        org_rowid -> BigInt,
        title -> Text,
        description -> Nullable<Text>,
        start_at -> BigInt,
        end_at -> Nullable<BigInt>,
        thumbnail_url -> Nullable<Text>,
        banner_url -> Nullable<Text>,
        visibility -> SmallInt,
        landmark -> Nullable<Text>,
        custom_location -> Nullable<Text>,
    }
}

joinable!(event -> organization (org_rowid));

table! {
    event_admin (event_rowid, user_id) {
        event_rowid -> BigInt,
        user_id -> BigInt,
    }
}

joinable!(event_admin -> event (event_rowid));
joinable!(event_admin -> users (user_id));

table! {
    event_rsvp (event_rowid, user_id) {
        event_rowid -> BigInt,
        user_id -> BigInt,
        status -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(event_rsvp -> event (event_rowid));
joinable!(event_rsvp -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Official status
///////////////////////////////////////////////////////////////////////

// Exactly one of org_rowid and event_rowid is set per row. Partial
// unique indexes on both columns reject duplicate submissions for the
// same target.
table! {
    official_pending (rowid) {
        rowid -> BigInt,
        org_rowid -> Nullable<BigInt>,
        event_rowid -> Nullable<BigInt>,
        created_at -> BigInt,
    }
}

table! {
    official (rowid) {
        rowid -> BigInt,
        org_rowid -> Nullable<BigInt>,
        event_rowid -> Nullable<BigInt>,
        created_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(
    users,
    organization,
    organization_admin,
    organization_member,
    event,
    event_admin,
    event_rsvp,
    official_pending,
    official,
);
