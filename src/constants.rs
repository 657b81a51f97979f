pub struct Constants;

impl Constants {
    pub const REPOSITORY_FOLDER_NAME: &str = ".git";
    pub const OBJECTS_FOLDER_NAME: &str = "objects";
    pub const REFS_FOLDER_NAME: &str = "refs";
    pub const HEADS_FOLDER_NAME: &str = "heads";
    pub const HEAD_FILE_NAME: &str = "HEAD";
    pub const DEFAULT_HEAD: &str = "ref: refs/heads/main\n";
    pub const TEMP_OBJECT_PREFIX: &str = "tmp_obj_";

    pub const AUTHOR_NAME_VAR: &str = "GIT_AUTHOR_NAME";
    pub const AUTHOR_EMAIL_VAR: &str = "GIT_AUTHOR_EMAIL";
    pub const COMMITTER_NAME_VAR: &str = "GIT_COMMITTER_NAME";
    pub const COMMITTER_EMAIL_VAR: &str = "GIT_COMMITTER_EMAIL";
    pub const DEFAULT_USER_NAME: &str = "mygit";
    pub const DEFAULT_USER_EMAIL: &str = "mygit@localhost";
}
