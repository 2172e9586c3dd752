pub mod mock_collaborators;
