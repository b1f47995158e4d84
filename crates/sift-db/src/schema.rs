diesel::table! {
    packages (pk) {
        pk -> Integer,
        package_id -> Text,
        package_id_lower -> Text,
        version -> Text,
        normalized_version -> Text,
        is_prerelease -> Bool,
        downloads -> BigInt,
        listed -> Bool,
        title -> Nullable<Text>,
        description -> Nullable<Text>,
        summary -> Nullable<Text>,
        authors -> Text,
        tags -> Text,
        icon_url -> Nullable<Text>,
        license_url -> Nullable<Text>,
        project_url -> Nullable<Text>,
    }
}
