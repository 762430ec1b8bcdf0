//! Change collection against real scratch repositories.

mod common;

use scriv::changes::{self, UNREADABLE_PLACEHOLDER};
use scriv::git::GitCli;

use common::TestRepo;

#[tokio::test]
async fn tracked_modification_shows_up_in_the_diff() {
    let repo = TestRepo::new();
    repo.commit_file("file.txt", "original\n");
    repo.write_file("file.txt", "modified\n");

    let git = GitCli::new(repo.path().to_path_buf());
    let set = changes::collect(&git, true).await.unwrap();

    assert!(set.tracked_diff.contains("-original"));
    assert!(set.tracked_diff.contains("+modified"));
}

#[tokio::test]
async fn staged_modification_is_part_of_the_tracked_diff() {
    let repo = TestRepo::new();
    repo.commit_file("file.txt", "original\n");
    repo.write_file("file.txt", "staged edit\n");
    repo.git(&["add", "file.txt"]);

    let git = GitCli::new(repo.path().to_path_buf());
    let set = changes::collect(&git, true).await.unwrap();

    assert!(set.tracked_diff.contains("+staged edit"));
}

#[tokio::test]
async fn untracked_contents_render_in_enumeration_order() {
    let repo = TestRepo::new();
    repo.write_file("a.txt", "alpha\n");
    repo.write_file("b.txt", "beta\n");

    let git = GitCli::new(repo.path().to_path_buf());
    let set = changes::collect(&git, true).await.unwrap();
    let blob = set.render();

    let a_at = blob.find("New file: a.txt").unwrap();
    let b_at = blob.find("New file: b.txt").unwrap();
    assert!(a_at < b_at);
    assert!(blob.contains("alpha"));
    assert!(blob.contains("beta"));
}

#[tokio::test]
async fn unreadable_untracked_file_becomes_the_placeholder() {
    let repo = TestRepo::new();
    repo.write_binary("image.bin", &[0u8, 159, 146, 150]);

    let git = GitCli::new(repo.path().to_path_buf());
    let set = changes::collect(&git, true).await.unwrap();

    assert!(
        set.render()
            .contains(&format!("New file: image.bin\n{UNREADABLE_PLACEHOLDER}"))
    );
}

#[tokio::test]
async fn mixed_readable_and_unreadable_files_both_collect() {
    let repo = TestRepo::new();
    repo.write_file("readme.txt", "hello\n");
    repo.write_binary("blob.bin", &[0u8, 1, 2, 255]);

    let git = GitCli::new(repo.path().to_path_buf());
    let set = changes::collect(&git, true).await.unwrap();

    assert_eq!(set.untracked.len(), 2);
    let blob = set.render();
    assert!(blob.contains("hello"));
    assert!(blob.contains(UNREADABLE_PLACEHOLDER));
}

#[tokio::test]
async fn ignored_files_stay_out_of_the_blob() {
    let repo = TestRepo::new();
    repo.commit_file(".gitignore", "target/\n");
    repo.write_file("target/out.txt", "build artifact\n");

    let git = GitCli::new(repo.path().to_path_buf());
    let set = changes::collect(&git, true).await.unwrap();

    assert!(!set.render().contains("out.txt"));
}

#[tokio::test]
async fn fresh_repository_without_head_still_collects() {
    let repo = TestRepo::without_initial_commit();
    repo.write_file("first.txt", "first\n");

    let git = GitCli::new(repo.path().to_path_buf());
    let set = changes::collect(&git, true).await.unwrap();

    assert!(set.render().contains("New file: first.txt"));
}

#[tokio::test]
async fn clean_repository_collects_an_empty_set() {
    let repo = TestRepo::new();
    let git = GitCli::new(repo.path().to_path_buf());
    let set = changes::collect(&git, true).await.unwrap();
    assert!(set.is_empty());
}
